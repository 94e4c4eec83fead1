//! Configuration system for the bar chart
//! Layout constants, colors, tooltip text and the data source

use bar_chart_shared::{ChartError, TooltipConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod parser;
pub mod validation;

pub use parser::ConfigParser;
pub use validation::ConfigValidator;

/// Remote document rendered when no other source is configured
pub const DEFAULT_DATA_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/GDP-data.json";

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Validation error in {field}: {message}")]
    Validation { field: String, message: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

impl From<ConfigError> for ChartError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Parse(message) => ChartError::InvalidConfig {
                message,
                field: None,
            },
            ConfigError::Validation { field, message } => ChartError::InvalidConfig {
                message,
                field: Some(field),
            },
        }
    }
}

/// Complete chart configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// URL of the `{ name, data }` document
    pub data_url: String,

    /// One of error, warn, info, debug, trace
    pub log_level: String,

    /// Abort the fetch after this many milliseconds; no timeout when unset
    pub fetch_timeout_ms: Option<u32>,

    pub layout: LayoutConfig,
    pub style: StyleConfig,
    pub tooltip: TooltipConfig,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            data_url: DEFAULT_DATA_URL.to_string(),
            log_level: "info".to_string(),
            fetch_timeout_ms: None,
            layout: LayoutConfig::default(),
            style: StyleConfig::default(),
            tooltip: TooltipConfig::default(),
        }
    }
}

impl ChartConfig {
    /// Parse a (possibly partial) JSON configuration and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let config = ConfigParser::parse_json(json)?;
        ConfigValidator::validate(&config)?;
        Ok(config)
    }

    /// Apply `data` and `log` overrides from a page query string
    pub fn apply_query(&mut self, query: &str) -> Result<()> {
        ConfigParser::apply_query(self, query);
        ConfigValidator::validate(self)
    }

    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.log_level
            .parse()
            .unwrap_or(log::LevelFilter::Info)
    }
}

/// Geometry of the chart relative to the viewport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Pixels subtracted from the window size for the drawing surface
    pub viewport_margin: f64,

    /// Horizontal padding is `width / padding_x_divisor`
    pub padding_x_divisor: f64,

    /// Vertical padding is `height / padding_y_divisor`
    pub padding_y_divisor: f64,

    /// Extra width added to each bar so neighbours touch
    pub bar_overlap: f64,

    /// Approximate pixels per x-axis tick
    pub x_tick_spacing: f64,

    /// Approximate number of y-axis ticks
    pub y_tick_count: usize,

    /// Baseline of the title text from the top of the surface
    pub title_offset_y: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            viewport_margin: 15.0,
            padding_x_divisor: 15.0,
            padding_y_divisor: 10.0,
            bar_overlap: 0.1,
            x_tick_spacing: 60.0,
            y_tick_count: 10,
            title_offset_y: 30.0,
        }
    }
}

/// Colors and cursors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub bar_fill: String,
    pub bar_hover_fill: String,
    pub hover_cursor: String,
    pub default_cursor: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            bar_fill: "blue".to_string(),
            bar_hover_fill: "red".to_string(),
            hover_cursor: "pointer".to_string(),
            default_cursor: "default".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ChartConfig::default();
        assert!(ConfigValidator::validate(&config).is_ok());
        assert_eq!(config.data_url, DEFAULT_DATA_URL);
        assert_eq!(config.log_level_filter(), log::LevelFilter::Info);
    }

    #[test]
    fn test_config_error_into_chart_error() {
        let err: ChartError = ConfigError::Validation {
            field: "layout.y_tick_count".to_string(),
            message: "must be greater than 0".to_string(),
        }
        .into();

        assert_eq!(
            err,
            ChartError::InvalidConfig {
                message: "must be greater than 0".to_string(),
                field: Some("layout.y_tick_count".to_string()),
            }
        );
    }
}
