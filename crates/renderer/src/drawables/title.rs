use bar_chart_config::LayoutConfig;
use bar_chart_shared::Dataset;
use serde::{Deserialize, Serialize};

use crate::layout::ChartLayout;

pub const TITLE_ID: &str = "title";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleText {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

/// Centered above the plot
pub fn build_title(dataset: &Dataset, layout: &ChartLayout, config: &LayoutConfig) -> TitleText {
    TitleText {
        x: layout.width / 2.0,
        y: config.title_offset_y,
        text: dataset.title().to_string(),
    }
}
