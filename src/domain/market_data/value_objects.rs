use derive_more::{Constructor, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use strum::{AsRefStr, EnumIter, EnumString};

/// Value Object - Price in quote currency
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Deref, Constructor, Serialize, Deserialize)]
pub struct Price(f64);

impl Price {
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Value Object - Timestamp in milliseconds since the Unix epoch
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, From, Into, Deref, Constructor, Serialize,
    Deserialize,
)]
pub struct Timestamp(u64);

impl Timestamp {
    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn as_f64(&self) -> f64 {
        self.0 as f64
    }

    pub fn from_millis(value: u64) -> Self {
        Self(value)
    }

    /// Exchanges report candle open times in whole seconds.
    pub fn from_unix_seconds(seconds: u64) -> Self {
        Self(seconds.saturating_mul(1000))
    }
}

/// Value Object - OHLC prices of a single candle
#[derive(Debug, Clone, Copy, PartialEq, Constructor, Serialize, Deserialize)]
pub struct OHLC {
    pub open: Price,
    pub high: Price,
    pub low: Price,
    pub close: Price,
}

/// Value Object - Trading pair as the exchange names it.
///
/// Kraken takes `XBTUSD` in the query but keys the response by its internal
/// name `XXBTZUSD`, so both are carried.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{}", query)]
pub struct TradingPair {
    pub query: String,
    pub result_key: String,
}

impl TradingPair {
    pub fn new(query: impl Into<String>, result_key: impl Into<String>) -> Self {
        Self { query: query.into(), result_key: result_key.into() }
    }

    pub fn btc_usd() -> Self {
        Self::new("XBTUSD", "XXBTZUSD")
    }
}

impl Default for TradingPair {
    fn default() -> Self {
        Self::btc_usd()
    }
}

/// Value Object - Candle width requested from the provider
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, AsRefStr, Serialize,
    Deserialize,
)]
pub enum CandleInterval {
    #[display(fmt = "4h")]
    #[strum(serialize = "240")]
    FourHours,
    #[display(fmt = "1d")]
    #[strum(serialize = "1440")]
    OneDay,
}

impl CandleInterval {
    pub fn minutes(&self) -> u32 {
        match self {
            Self::FourHours => 240,
            Self::OneDay => 1440,
        }
    }

    /// Value of the `interval` query parameter.
    pub fn to_kraken_str(&self) -> &str {
        self.as_ref()
    }

    pub fn duration_ms(&self) -> u64 {
        self.minutes() as u64 * 60 * 1000
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_query_value_is_minute_count() {
        assert_eq!(CandleInterval::FourHours.to_kraken_str(), "240");
        assert_eq!(CandleInterval::OneDay.to_kraken_str(), "1440");
        assert_eq!(CandleInterval::OneDay.duration_ms(), 86_400_000);
    }

    #[test]
    fn seconds_become_millis() {
        assert_eq!(Timestamp::from_unix_seconds(1_700_000_000).value(), 1_700_000_000_000);
    }
}
