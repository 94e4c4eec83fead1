//! Configuration validation utilities

use crate::{ChartConfig, ConfigError, LayoutConfig, Result, StyleConfig};

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration
    pub fn validate(config: &ChartConfig) -> Result<()> {
        Self::validate_source(config)?;
        Self::validate_layout(&config.layout)?;
        Self::validate_style(&config.style)?;
        Ok(())
    }

    fn validate_source(config: &ChartConfig) -> Result<()> {
        if config.data_url.trim().is_empty() {
            return Err(invalid("data_url", "cannot be empty"));
        }

        // Relative URLs are resolved by the browser against the page
        match url::Url::parse(&config.data_url) {
            Ok(_) | Err(url::ParseError::RelativeUrlWithoutBase) => {}
            Err(e) => return Err(invalid("data_url", &format!("{e}"))),
        }

        if config.log_level.parse::<log::LevelFilter>().is_err() {
            return Err(invalid(
                "log_level",
                &format!("unknown level '{}'", config.log_level),
            ));
        }

        match config.fetch_timeout_ms {
            Some(0) => return Err(invalid("fetch_timeout_ms", "must be greater than 0")),
            // Browser timers take a signed 32-bit delay
            Some(ms) if i32::try_from(ms).is_err() => {
                return Err(invalid(
                    "fetch_timeout_ms",
                    &format!("must be at most {}, got {ms}", i32::MAX),
                ))
            }
            _ => {}
        }

        Ok(())
    }

    fn validate_layout(layout: &LayoutConfig) -> Result<()> {
        if !(layout.viewport_margin >= 0.0) {
            return Err(invalid("layout.viewport_margin", "cannot be negative"));
        }

        for (field, value) in [
            ("layout.padding_x_divisor", layout.padding_x_divisor),
            ("layout.padding_y_divisor", layout.padding_y_divisor),
            ("layout.x_tick_spacing", layout.x_tick_spacing),
        ] {
            if !(value > 0.0) {
                return Err(invalid(
                    field,
                    &format!("must be greater than 0, got {value}"),
                ));
            }
        }

        // Each side loses at most half the surface to padding
        if layout.padding_x_divisor < 2.0 || layout.padding_y_divisor < 2.0 {
            return Err(invalid("layout", "padding divisors must be at least 2"));
        }

        if layout.y_tick_count == 0 {
            return Err(invalid("layout.y_tick_count", "must be greater than 0"));
        }

        if layout.bar_overlap < 0.0 {
            return Err(invalid("layout.bar_overlap", "cannot be negative"));
        }

        Ok(())
    }

    fn validate_style(style: &StyleConfig) -> Result<()> {
        for (field, value) in [
            ("style.bar_fill", &style.bar_fill),
            ("style.bar_hover_fill", &style.bar_hover_fill),
            ("style.hover_cursor", &style.hover_cursor),
            ("style.default_cursor", &style.default_cursor),
        ] {
            if value.trim().is_empty() {
                return Err(invalid(field, "cannot be empty"));
            }
        }
        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::Validation {
        field: field.to_string(),
        message: message.to_string(),
    }
}
