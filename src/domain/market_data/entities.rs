use super::value_objects::{OHLC, Price, Timestamp};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Domain entity - one normalized candle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: Timestamp,
    pub ohlc: OHLC,
}

impl PricePoint {
    pub fn new(timestamp: Timestamp, ohlc: OHLC) -> Self {
        Self { timestamp, ohlc }
    }

    pub fn close(&self) -> Price {
        self.ohlc.close
    }
}

/// Domain entity - the loaded price sequence.
///
/// Kept in provider order and never mutated: a new fetch builds a new series
/// and the old one is dropped, so clones share the same allocation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceSeries {
    points: Arc<Vec<PricePoint>>,
}

impl PriceSeries {
    pub fn new(points: Vec<PricePoint>) -> Self {
        Self { points: Arc::new(points) }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&PricePoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    pub fn latest_close(&self) -> Option<Price> {
        self.last().map(PricePoint::close)
    }

    /// Lowest and highest close - the line chart only plots closes.
    pub fn close_range(&self) -> Option<(Price, Price)> {
        let mut closes = self.points.iter().map(PricePoint::close);
        let first = closes.next()?;
        Some(closes.fold((first, first), |(min, max), p| {
            (if p < min { p } else { min }, if p > max { p } else { max })
        }))
    }

    /// Oldest and newest timestamp.
    pub fn time_range(&self) -> Option<(Timestamp, Timestamp)> {
        Some((self.first()?.timestamp, self.last()?.timestamp))
    }
}

impl From<Vec<PricePoint>> for PriceSeries {
    fn from(points: Vec<PricePoint>) -> Self {
        Self::new(points)
    }
}
