//! Complete description of one render

use bar_chart_config::ChartConfig;
use bar_chart_shared::{Dataset, ViewportSize};
use serde::{Deserialize, Serialize};

use crate::drawables::{
    bars::build_bars, title::build_title, x_axis::build_x_axis, y_axis::build_y_axis, Axis,
    BarShape, TitleText,
};
use crate::layout::ChartLayout;
use crate::scales::{LinearScale, TimeScale};

/// Everything the browser layer needs to draw the chart, in pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartScene {
    pub width: f64,
    pub height: f64,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub bars: Vec<BarShape>,
    pub title: TitleText,
}

impl ChartScene {
    /// Lay out `dataset` for a viewport. Same inputs give the same scene.
    pub fn build(dataset: &Dataset, viewport: ViewportSize, config: &ChartConfig) -> Self {
        let layout = ChartLayout::new(viewport, &config.layout);
        let (x_scale, y_scale) = Self::scales(dataset, &layout);

        let scene = Self {
            width: layout.width,
            height: layout.height,
            x_axis: build_x_axis(&x_scale, &layout, &config.layout),
            y_axis: build_y_axis(&y_scale, &layout, &config.layout),
            bars: build_bars(dataset, &x_scale, &y_scale, &layout, &config.layout),
            title: build_title(dataset, &layout, &config.layout),
        };

        log::debug!(
            "Scene {}x{}: {} bars, {} x ticks, {} y ticks",
            scene.width,
            scene.height,
            scene.bars.len(),
            scene.x_axis.ticks.len(),
            scene.y_axis.ticks.len()
        );

        scene
    }

    /// Time scale over the date extent, value scale over `[0, max]`
    pub fn scales(dataset: &Dataset, layout: &ChartLayout) -> (TimeScale, LinearScale) {
        let x_scale = TimeScale::new(dataset.date_extent(), layout.x_range());
        let y_scale = LinearScale::new((0.0, dataset.max_value()), layout.y_range());
        (x_scale, y_scale)
    }
}
