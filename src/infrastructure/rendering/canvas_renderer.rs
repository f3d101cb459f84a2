use crate::domain::chart::{ChartConfig, LineChart};
use crate::domain::errors::{AppError, RenderingResult};
use crate::domain::logging::LogComponent;
use crate::log_debug;
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Canvas 2D renderer for the close-price line and its point markers.
///
/// Axes, ticks and labels are intentionally not drawn.
pub struct CanvasRenderer {
    config: ChartConfig,
}

impl CanvasRenderer {
    pub fn new(config: ChartConfig) -> Self {
        Self { config }
    }

    fn context(&self, canvas: &HtmlCanvasElement) -> RenderingResult<CanvasRenderingContext2d> {
        canvas.set_width(self.config.dimensions.width);
        canvas.set_height(self.config.dimensions.height);

        canvas
            .get_context("2d")
            .map_err(|e| AppError::Rendering(format!("Failed to get 2D context: {e:?}")))?
            .ok_or_else(|| AppError::Rendering("2D context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| AppError::Rendering("Failed to cast to 2D context".to_string()))
    }

    pub fn render(&self, canvas: &HtmlCanvasElement, chart: &LineChart) -> RenderingResult<()> {
        let context = self.context(canvas)?;
        let dims = self.config.dimensions;
        context.clear_rect(0.0, 0.0, dims.width as f64, dims.height as f64);

        if chart.is_empty() {
            return Ok(());
        }

        let positions = chart.screen_positions();
        self.render_line(&context, &positions);
        self.render_markers(&context, &positions)?;

        log_debug!(
            LogComponent::Infrastructure("CanvasRenderer"),
            "Rendered {} points",
            positions.len()
        );
        Ok(())
    }

    fn render_line(&self, context: &CanvasRenderingContext2d, positions: &[(f64, f64)]) {
        let style = &self.config.style;
        context.set_stroke_style(&JsValue::from(style.line_color.to_css()));
        context.set_line_width(style.line_width);
        context.set_line_join("round");

        context.begin_path();
        for (i, (x, y)) in positions.iter().enumerate() {
            if i == 0 {
                context.move_to(*x, *y);
            } else {
                context.line_to(*x, *y);
            }
        }
        context.stroke();
    }

    fn render_markers(
        &self,
        context: &CanvasRenderingContext2d,
        positions: &[(f64, f64)],
    ) -> RenderingResult<()> {
        let style = &self.config.style;
        context.set_fill_style(&JsValue::from(style.point_fill.to_css()));

        for (x, y) in positions {
            context.begin_path();
            context
                .arc(*x, *y, style.point_radius, 0.0, TAU)
                .map_err(|e| AppError::Rendering(format!("arc failed: {e:?}")))?;
            context.fill();
        }
        Ok(())
    }
}
