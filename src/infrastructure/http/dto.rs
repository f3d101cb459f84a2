use crate::domain::errors::{FetchError, FetchResult};
use crate::domain::market_data::{OHLC, Price, PricePoint, Timestamp, TradingPair};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Raw body of `GET /0/public/OHLC`.
///
/// `result` holds one array per pair, keyed by the exchange's internal pair
/// name, next to a scalar `last` cursor.
#[derive(Debug, Deserialize)]
pub struct KrakenOhlcResponse {
    #[serde(default)]
    pub error: Vec<String>,
    pub result: Option<Map<String, Value>>,
}

impl KrakenOhlcResponse {
    pub fn from_body(body: &str) -> FetchResult<Self> {
        serde_json::from_str(body).map_err(|e| FetchError::InvalidJson(e.to_string()))
    }

    /// Turn every candle into a [`PricePoint`], in response order.
    ///
    /// Any defect fails the whole response.
    pub fn into_price_points(self, pair: &TradingPair) -> FetchResult<Vec<PricePoint>> {
        if !self.error.is_empty() {
            return Err(FetchError::provider(&self.error));
        }
        let result = self.result.ok_or(FetchError::MissingResult)?;
        let candles = result
            .get(&pair.result_key)
            .and_then(Value::as_array)
            .ok_or_else(|| FetchError::MissingPair(pair.result_key.clone()))?;

        candles.iter().enumerate().map(|(index, raw)| parse_candle(index, raw)).collect()
    }
}

/// `[time, open, high, low, close, vwap, volume, count]` - only the first five are read.
fn parse_candle(index: usize, raw: &Value) -> FetchResult<PricePoint> {
    let fields = raw.as_array().ok_or_else(|| FetchError::malformed(index, "not an array"))?;
    if fields.len() < 5 {
        return Err(FetchError::malformed(index, format!("expected 5 fields, got {}", fields.len())));
    }

    let seconds = fields[0]
        .as_u64()
        .ok_or_else(|| FetchError::malformed(index, "invalid timestamp"))?;

    let ohlc = OHLC::new(
        parse_price(index, "open", &fields[1])?,
        parse_price(index, "high", &fields[2])?,
        parse_price(index, "low", &fields[3])?,
        parse_price(index, "close", &fields[4])?,
    );

    Ok(PricePoint::new(Timestamp::from_unix_seconds(seconds), ohlc))
}

/// Kraken sends prices as decimal strings; plain numbers are accepted too.
fn parse_price(index: usize, field: &str, value: &Value) -> FetchResult<Price> {
    let parsed = match value {
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Number(n) => n.as_f64(),
        _ => None,
    };
    parsed
        .filter(|p| p.is_finite())
        .map(Price::new)
        .ok_or_else(|| FetchError::malformed(index, format!("invalid {} price", field)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_and_string_prices_both_parse() {
        let p = parse_price(0, "open", &json!("52591.9")).unwrap();
        assert_eq!(p.value(), 52591.9);
        let p = parse_price(0, "open", &json!(10)).unwrap();
        assert_eq!(p.value(), 10.0);
    }

    #[test]
    fn non_numeric_price_is_rejected() {
        let err = parse_price(3, "close", &json!("abc")).unwrap_err();
        assert_eq!(err, FetchError::malformed(3, "invalid close price"));
        assert!(parse_price(0, "close", &json!(null)).is_err());
    }
}
