use super::entities::PriceSeries;
use serde::{Deserialize, Serialize};

/// Direction of the percentage badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

/// Percentage change between the first and last close of the loaded series.
///
/// `Absent` when there is nothing to divide by: an empty series or a first
/// close of zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Indicator {
    Present(f64),
    #[default]
    Absent,
}

impl Indicator {
    pub fn from_series(series: &PriceSeries) -> Self {
        match (series.first(), series.last()) {
            (Some(first), Some(last)) => {
                Self::percentage_change(first.close().value(), last.close().value())
            }
            _ => Self::Absent,
        }
    }

    pub fn percentage_change(first: f64, last: f64) -> Self {
        if first == 0.0 {
            return Self::Absent;
        }
        Self::Present((last - first) / first * 100.0)
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Present(v) => Some(*v),
            Self::Absent => None,
        }
    }

    pub fn trend(&self) -> Option<Trend> {
        self.value().map(|v| if v < 0.0 { Trend::Down } else { Trend::Up })
    }
}
