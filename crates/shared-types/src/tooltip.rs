//! Tooltip state, content and placement for the hover tooltip

use serde::{Deserialize, Serialize};

use crate::data_types::DataPoint;
use crate::events::{Point, ViewportSize};

/// Configuration for tooltip behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipConfig {
    /// Pixels the tooltip moves up when the pointer is in the lower half
    pub flip_up_offset: f64,

    /// Pixels the tooltip moves left of the pointer in the right half
    pub flip_left_offset: f64,

    /// Gap between pointer and tooltip in the left half
    pub right_offset: f64,

    /// Text placed before the value, e.g. a currency sign
    pub value_prefix: String,

    /// Text placed after the value, e.g. a unit
    pub value_suffix: String,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            flip_up_offset: 50.0,
            flip_left_offset: 170.0,
            right_offset: 20.0,
            value_prefix: "$".to_string(),
            value_suffix: " Billion".to_string(),
        }
    }
}

/// Text shown for the hovered bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipContent {
    pub date: String,
    pub value: String,
}

impl TooltipContent {
    pub fn for_point(point: &DataPoint, config: &TooltipConfig) -> Self {
        Self::new(&point.label, point.value, config)
    }

    pub fn new(date: &str, value: f64, config: &TooltipConfig) -> Self {
        Self {
            date: date.to_string(),
            value: format!("{}{}{}", config.value_prefix, value, config.value_suffix),
        }
    }
}

/// Represents the state of the tooltip
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TooltipState {
    pub visible: bool,
    pub content: Option<TooltipContent>,
}

impl TooltipState {
    pub fn show(&mut self, content: TooltipContent) {
        self.visible = true;
        self.content = Some(content);
    }

    /// Hides the tooltip but keeps the last content, like the page does
    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn opacity(&self) -> &'static str {
        if self.visible {
            "1"
        } else {
            "0"
        }
    }
}

/// Top-left corner of the tooltip for a pointer position.
///
/// Past the vertical midline the tooltip moves up, past the horizontal
/// midline it moves to the left of the pointer so it stays on screen.
pub fn tooltip_position(
    pointer: Point,
    viewport: ViewportSize,
    config: &TooltipConfig,
) -> Point {
    let top = if pointer.y > viewport.height / 2.0 {
        pointer.y - config.flip_up_offset
    } else {
        pointer.y
    };
    let left = if pointer.x > viewport.width / 2.0 {
        pointer.x - config.flip_left_offset
    } else {
        pointer.x + config.right_offset
    };

    Point::new(left, top)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: ViewportSize = ViewportSize {
        width: 1000.0,
        height: 800.0,
    };

    #[test]
    fn test_position_top_left_quadrant() {
        let pos = tooltip_position(
            Point::new(100.0, 100.0),
            VIEWPORT,
            &TooltipConfig::default(),
        );
        assert_eq!(pos, Point::new(120.0, 100.0));
    }

    #[test]
    fn test_position_flips_near_far_edges() {
        let pos = tooltip_position(
            Point::new(900.0, 700.0),
            VIEWPORT,
            &TooltipConfig::default(),
        );
        assert_eq!(pos, Point::new(730.0, 650.0));
    }

    #[test]
    fn test_midline_does_not_flip() {
        let pos = tooltip_position(
            Point::new(500.0, 400.0),
            VIEWPORT,
            &TooltipConfig::default(),
        );
        assert_eq!(pos, Point::new(520.0, 400.0));
    }

    #[test]
    fn test_content_format() {
        let content = TooltipContent::new("1950-01-01", 243.1, &TooltipConfig::default());
        assert_eq!(content.value, "$243.1 Billion");
        assert_eq!(content.date, "1950-01-01");

        let content = TooltipContent::new("1951-01-01", 200.0, &TooltipConfig::default());
        assert_eq!(content.value, "$200 Billion");
    }

    #[test]
    fn test_state_show_hide() {
        let mut state = TooltipState::default();
        assert_eq!(state.opacity(), "0");

        state.show(TooltipContent::new("1950-01-01", 1.0, &TooltipConfig::default()));
        assert!(state.visible);
        assert_eq!(state.opacity(), "1");

        state.hide();
        assert_eq!(state.opacity(), "0");
        assert!(state.content.is_some());
    }
}
