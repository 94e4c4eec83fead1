use bar_chart_config::LayoutConfig;

use super::axis::{Axis, AxisOrientation, Tick};
use crate::layout::ChartLayout;
use crate::scales::TimeScale;

pub const X_AXIS_ID: &str = "x-axis";

/// Bottom axis along the baseline, one tick per `x_tick_spacing` pixels
/// or so, labelled with the year (or the month on short spans)
pub fn build_x_axis(scale: &TimeScale, layout: &ChartLayout, config: &LayoutConfig) -> Axis {
    let count = layout.width / config.x_tick_spacing;
    let ticks: Vec<Tick> = scale
        .ticks(count)
        .into_iter()
        .map(|(ts, label)| Tick {
            offset: scale.apply(ts),
            label,
        })
        .collect();

    log::debug!(
        "X-axis: width={} pixels, {} ticks requested, {} placed",
        layout.width,
        count.round(),
        ticks.len()
    );

    Axis {
        id: X_AXIS_ID.to_string(),
        orientation: AxisOrientation::Bottom,
        translate: (0.0, layout.baseline()),
        range: scale.range,
        ticks,
    }
}
