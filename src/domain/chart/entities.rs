use super::value_objects::{ChartDimensions, Viewport};
use crate::domain::market_data::{PricePoint, PriceSeries};
use crate::number_format::format_price;
use crate::time_utils::format_date_label;

/// One plotted marker: x = candle time (ms), y = close, plus its tooltip text.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
    pub label: String,
}

impl ChartPoint {
    pub fn from_price_point(point: &PricePoint) -> Self {
        Self {
            x: point.timestamp.as_f64(),
            y: point.close().value(),
            label: tooltip_label(point),
        }
    }
}

/// `M/D/YYYY` newline `$close`.
pub fn tooltip_label(point: &PricePoint) -> String {
    format!(
        "{}\n${}",
        format_date_label(point.timestamp.value()),
        format_price(point.close().value())
    )
}

/// Everything the renderer needs for one frame: the points and where they go.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    pub points: Vec<ChartPoint>,
    pub viewport: Viewport,
}

impl LineChart {
    pub fn from_series(series: &PriceSeries, dimensions: ChartDimensions) -> Self {
        Self {
            points: series.points().iter().map(ChartPoint::from_price_point).collect(),
            viewport: Viewport::fit(series, dimensions),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Canvas coordinates of every point, in series order.
    pub fn screen_positions(&self) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .map(|p| (self.viewport.time_to_x(p.x), self.viewport.price_to_y(p.y)))
            .collect()
    }

    /// Index of the point horizontally closest to a canvas X coordinate.
    pub fn nearest_index(&self, canvas_x: f64) -> Option<usize> {
        self.points
            .iter()
            .enumerate()
            .map(|(i, p)| (i, (self.viewport.time_to_x(p.x) - canvas_x).abs()))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }

    pub fn nearest_point(&self, canvas_x: f64) -> Option<&ChartPoint> {
        self.nearest_index(canvas_x).map(|i| &self.points[i])
    }
}
