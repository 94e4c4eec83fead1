//! Configuration parsing from JSON and from the page query string

use crate::{ChartConfig, ConfigError, Result};

/// Configuration parser
pub struct ConfigParser;

impl ConfigParser {
    /// Parse JSON configuration. Missing fields keep their defaults.
    pub fn parse_json(content: &str) -> Result<ChartConfig> {
        serde_json::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("JSON parse error: {e}")))
    }

    /// Override fields from a query string such as `?data=/gdp.json&log=debug`.
    /// Unknown parameters are ignored.
    pub fn apply_query(config: &mut ChartConfig, query: &str) {
        let query = query.trim_start_matches('?');
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "data" => config.data_url = value.into_owned(),
                "log" => config.log_level = value.into_owned(),
                other => log::debug!("Ignoring query parameter: {other}"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ConfigParser::parse_json(
            r#"{ "style": { "bar_fill": "steelblue" }, "layout": { "y_tick_count": 5 } }"#,
        )
        .unwrap();

        assert_eq!(config.style.bar_fill, "steelblue");
        assert_eq!(config.style.bar_hover_fill, "red");
        assert_eq!(config.layout.y_tick_count, 5);
        assert_eq!(config.layout.viewport_margin, 15.0);
    }

    #[test]
    fn test_invalid_json() {
        let err = ConfigParser::parse_json("{ layout: }").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_query_overrides() {
        let mut config = ChartConfig::default();
        ConfigParser::apply_query(
            &mut config,
            "?data=https%3A%2F%2Fexample.com%2Fgdp.json&log=debug&theme=dark",
        );

        assert_eq!(config.data_url, "https://example.com/gdp.json");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_empty_query_is_noop() {
        let mut config = ChartConfig::default();
        ConfigParser::apply_query(&mut config, "");
        assert_eq!(config, ChartConfig::default());
    }
}
