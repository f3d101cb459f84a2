use crate::domain::market_data::PriceSeries;

/// Value Object - inner margins of the plot area, in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Padding {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Default for Padding {
    fn default() -> Self {
        Self { top: 55.0, bottom: 40.0, left: 35.0, right: 35.0 }
    }
}

/// Value Object - canvas size plus padding
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartDimensions {
    pub width: u32,
    pub height: u32,
    pub padding: Padding,
}

impl Default for ChartDimensions {
    fn default() -> Self {
        Self { width: 800, height: 400, padding: Padding::default() }
    }
}

impl ChartDimensions {
    pub fn plot_width(&self) -> f64 {
        (self.width as f64 - self.padding.left - self.padding.right).max(0.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.height as f64 - self.padding.top - self.padding.bottom).max(0.0)
    }
}

/// Value Object - data-space window mapped onto the plot area
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    pub start_time: f64,
    pub end_time: f64,
    pub min_price: f64,
    pub max_price: f64,
    pub dimensions: ChartDimensions,
}

impl Viewport {
    pub fn new(dimensions: ChartDimensions) -> Self {
        Self { start_time: 0.0, end_time: 0.0, min_price: 0.0, max_price: 0.0, dimensions }
    }

    /// Fit the viewport to the series: full time span, close-price span.
    pub fn fit(series: &PriceSeries, dimensions: ChartDimensions) -> Self {
        let mut viewport = Self::new(dimensions);
        if let Some((start, end)) = series.time_range() {
            viewport.start_time = start.as_f64();
            viewport.end_time = end.as_f64();
        }
        if let Some((min, max)) = series.close_range() {
            viewport.min_price = min.value();
            viewport.max_price = max.value();
        }
        viewport
    }

    pub fn time_range(&self) -> f64 {
        self.end_time - self.start_time
    }

    pub fn price_range(&self) -> f64 {
        self.max_price - self.min_price
    }

    /// Convert a timestamp to a canvas X coordinate
    pub fn time_to_x(&self, timestamp: f64) -> f64 {
        let left = self.dimensions.padding.left;
        if self.time_range() == 0.0 {
            return left + self.dimensions.plot_width() / 2.0;
        }
        let normalized = (timestamp - self.start_time) / self.time_range();
        left + normalized * self.dimensions.plot_width()
    }

    /// Convert a price to a canvas Y coordinate (Y grows downwards)
    pub fn price_to_y(&self, price: f64) -> f64 {
        let top = self.dimensions.padding.top;
        if self.price_range() == 0.0 {
            return top + self.dimensions.plot_height() / 2.0;
        }
        let normalized = (price - self.min_price) / self.price_range();
        top + self.dimensions.plot_height() * (1.0 - normalized)
    }
}

/// Value Object - Color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn from_hex(hex: u32) -> Self {
        Self { r: ((hex >> 16) & 0xFF) as u8, g: ((hex >> 8) & 0xFF) as u8, b: (hex & 0xFF) as u8 }
    }

    /// `#rrggbb`, as canvas and CSS expect it.
    pub fn to_css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub const WHITE: Color = Color::from_hex(0xFFFFFF);
    pub const ORANGE: Color = Color::from_hex(0xF89620);
    pub const RED: Color = Color::from_hex(0xFF0000);
    pub const GREEN: Color = Color::from_hex(0x008000);
}

impl From<u32> for Color {
    fn from(hex: u32) -> Self {
        Self::from_hex(hex)
    }
}

/// Value Object - visual style of the line/scatter chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartStyle {
    pub line_color: Color,
    pub line_width: f64,
    pub point_fill: Color,
    pub point_radius: f64,
    pub positive_color: Color,
    pub negative_color: Color,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            line_color: Color::ORANGE,
            line_width: 2.0,
            point_fill: Color::WHITE,
            point_radius: 4.0,
            positive_color: Color::GREEN,
            negative_color: Color::RED,
        }
    }
}

/// Compile-time configuration of the chart surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChartConfig {
    pub dimensions: ChartDimensions,
    pub style: ChartStyle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_css_round_trip() {
        assert_eq!(Color::ORANGE.to_css(), "#f89620");
        assert_eq!(Color::from(0x0a0b0c).to_css(), "#0a0b0c");
    }

    #[test]
    fn flat_ranges_center_the_point() {
        let viewport = Viewport::new(ChartDimensions::default());
        assert_eq!(viewport.time_to_x(123.0), 35.0 + 730.0 / 2.0);
        assert_eq!(viewport.price_to_y(5.0), 55.0 + 305.0 / 2.0);
    }
}
