use super::value_objects::{CandleInterval, TradingPair};
use crate::domain::logging::LogComponent;
use crate::log_warn;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{AsRefStr, EnumIter, EnumString};

pub const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// The four lookback windows offered by the range buttons.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, EnumString, AsRefStr, Serialize,
    Deserialize,
)]
pub enum TimeRange {
    #[default]
    #[strum(serialize = "1m")]
    #[serde(rename = "1m")]
    OneMonth,
    #[strum(serialize = "1y")]
    #[serde(rename = "1y")]
    OneYear,
    #[strum(serialize = "2y")]
    #[serde(rename = "2y")]
    TwoYears,
    #[strum(serialize = "3y")]
    #[serde(rename = "3y")]
    ThreeYears,
}

/// Everything needed to issue one OHLC request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchParams {
    pub pair: TradingPair,
    pub interval: CandleInterval,
    pub since_secs: u64,
    pub lookback_days: u64,
}

impl TimeRange {
    pub fn token(&self) -> &str {
        self.as_ref()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::OneMonth => "1 Month",
            Self::OneYear => "1 Year",
            Self::TwoYears => "2 Years",
            Self::ThreeYears => "3 Years",
        }
    }

    pub fn interval(&self) -> CandleInterval {
        match self {
            Self::OneMonth => CandleInterval::FourHours,
            Self::OneYear | Self::TwoYears | Self::ThreeYears => CandleInterval::OneDay,
        }
    }

    pub fn lookback_days(&self) -> u64 {
        match self {
            Self::OneMonth => 30,
            Self::OneYear => 365,
            Self::TwoYears => 2 * 365,
            Self::ThreeYears => 3 * 365,
        }
    }

    /// Map the selection to request parameters. Depends only on `self` and
    /// `now_secs`; every variant has an entry, there is no default arm.
    pub fn fetch_params(&self, pair: &TradingPair, now_secs: u64) -> FetchParams {
        let lookback_days = self.lookback_days();
        FetchParams {
            pair: pair.clone(),
            interval: self.interval(),
            since_secs: now_secs.saturating_sub(lookback_days * SECONDS_PER_DAY),
            lookback_days,
        }
    }

    /// Parse a token coming from outside the type system (URL, storage).
    /// Unknown tokens fall back to one month, with a warning.
    pub fn from_token_or_default(token: &str) -> Self {
        Self::from_str(token).unwrap_or_else(|_| {
            log_warn!(
                LogComponent::Domain("TimeRange"),
                "Unknown range token '{}', using {}",
                token,
                Self::default().label()
            );
            Self::default()
        })
    }
}
