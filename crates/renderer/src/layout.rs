//! Surface size and padding derived from the browser viewport

use bar_chart_config::LayoutConfig;
use bar_chart_shared::ViewportSize;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub padding_x: f64,
    pub padding_y: f64,
}

impl ChartLayout {
    /// The surface is the viewport minus a fixed margin; padding is a
    /// fraction of the surface
    pub fn new(viewport: ViewportSize, config: &LayoutConfig) -> Self {
        let width = (viewport.width - config.viewport_margin).max(0.0);
        let height = (viewport.height - config.viewport_margin).max(0.0);
        Self {
            width,
            height,
            padding_x: width / config.padding_x_divisor,
            padding_y: height / config.padding_y_divisor,
        }
    }

    /// Pixel span of the time axis, left to right
    pub fn x_range(&self) -> (f64, f64) {
        (self.padding_x, self.width - self.padding_x)
    }

    /// Pixel span of the value axis, bottom to top
    pub fn y_range(&self) -> (f64, f64) {
        (self.height - self.padding_y, self.padding_y)
    }

    /// Y coordinate of the x-axis baseline
    pub fn baseline(&self) -> f64 {
        self.height - self.padding_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_from_viewport() {
        let layout = ChartLayout::new(
            ViewportSize::new(1515.0, 815.0),
            &LayoutConfig::default(),
        );

        assert_eq!(layout.width, 1500.0);
        assert_eq!(layout.height, 800.0);
        assert_eq!(layout.padding_x, 100.0);
        assert_eq!(layout.padding_y, 80.0);
        assert_eq!(layout.x_range(), (100.0, 1400.0));
        assert_eq!(layout.y_range(), (720.0, 80.0));
        assert_eq!(layout.baseline(), 720.0);
    }

    #[test]
    fn test_tiny_viewport_clamps_to_zero() {
        let layout = ChartLayout::new(ViewportSize::new(10.0, 10.0), &LayoutConfig::default());
        assert_eq!(layout.width, 0.0);
        assert_eq!(layout.height, 0.0);
    }
}
