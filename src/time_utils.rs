use chrono::DateTime;

/// Tooltip date for a candle open time: `M/D/YYYY` in UTC.
pub fn format_date_label(timestamp_ms: u64) -> String {
    i64::try_from(timestamp_ms)
        .ok()
        .and_then(DateTime::from_timestamp_millis)
        .map(|dt| dt.format("%-m/%-d/%Y").to_string())
        .unwrap_or_default()
}
