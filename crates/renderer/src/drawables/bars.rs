use bar_chart_config::LayoutConfig;
use bar_chart_shared::Dataset;
use serde::{Deserialize, Serialize};

use crate::layout::ChartLayout;
use crate::scales::{LinearScale, TimeScale};

/// One rectangle per data point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarShape {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Source date string, shown in the tooltip
    pub date: String,
    pub value: f64,
}

/// Bars share the surface width evenly and grow up from the baseline.
/// Height is `value / max * plot height`.
pub fn build_bars(
    dataset: &Dataset,
    x_scale: &TimeScale,
    y_scale: &LinearScale,
    layout: &ChartLayout,
    config: &LayoutConfig,
) -> Vec<BarShape> {
    let width = layout.width / dataset.len() as f64 + config.bar_overlap;

    dataset
        .points()
        .iter()
        .map(|point| {
            let y = y_scale.apply(point.value);
            BarShape {
                x: x_scale.apply(point.timestamp_ms()),
                y,
                width,
                height: layout.height - y - layout.padding_y,
                date: point.label.clone(),
                value: point.value,
            }
        })
        .collect()
}
