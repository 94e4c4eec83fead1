use bar_chart_config::LayoutConfig;

use super::axis::{Axis, AxisOrientation, Tick};
use crate::layout::ChartLayout;
use crate::scales::LinearScale;

pub const Y_AXIS_ID: &str = "y-axis";

/// Left axis at the horizontal padding with nice value ticks
pub fn build_y_axis(scale: &LinearScale, layout: &ChartLayout, config: &LayoutConfig) -> Axis {
    let ticks = scale
        .ticks(config.y_tick_count)
        .into_iter()
        .map(|(value, label)| Tick {
            offset: scale.apply(value),
            label,
        })
        .collect();

    Axis {
        id: Y_AXIS_ID.to_string(),
        orientation: AxisOrientation::Left,
        translate: (layout.padding_x, 0.0),
        range: scale.range,
        ticks,
    }
}
