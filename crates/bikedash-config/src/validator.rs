//! Runtime validation of a loaded configuration.

use crate::loader::ConfigError;
use crate::schema::Config;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const DIMENSION_RANGE: std::ops::RangeInclusive<u32> = 100..=4000;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration, reporting the first offending field.
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.dataset.path.trim().is_empty() {
            return Err(invalid("dataset.path", "dataset path cannot be empty"));
        }

        if config.server.host.trim().is_empty() {
            return Err(invalid("server.host", "host cannot be empty"));
        }
        if config.server.port == 0 {
            return Err(invalid("server.port", "port must be between 1 and 65535"));
        }

        for (field, value) in [
            ("graphs.width", config.graphs.width),
            ("graphs.height", config.graphs.height),
        ] {
            if !DIMENSION_RANGE.contains(&value) {
                return Err(invalid(
                    field,
                    format!("{value} is outside 100..=4000 pixels"),
                ));
            }
        }

        let colors = &config.graphs.styling.colors;
        for (field, value) in [
            ("graphs.styling.colors.neutral", &colors.neutral),
            ("graphs.styling.colors.highlight_max", &colors.highlight_max),
            ("graphs.styling.colors.highlight_min", &colors.highlight_min),
            ("graphs.styling.colors.line", &colors.line),
            ("graphs.styling.colors.background", &colors.background),
        ] {
            if !is_hex_color(value) {
                return Err(invalid(
                    field,
                    format!("'{value}' is not a #RRGGBB color"),
                ));
            }
        }

        let level = config.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(invalid(
                "logging.level",
                format!("must be one of: {}", LOG_LEVELS.join(", ")),
            ));
        }

        Ok(())
    }
}

/// Whether `value` is a `#RRGGBB` hex color.
pub fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}

fn invalid(field: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field: field.to_string(),
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ConfigValidator::validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_hex_colors() {
        assert!(is_hex_color("#90CAF9"));
        assert!(is_hex_color("#ef5350"));
        assert!(!is_hex_color("90CAF9"));
        assert!(!is_hex_color("#90CAF"));
        assert!(!is_hex_color("#GGGGGG"));
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        let mut config = Config::default();
        config.graphs.width = 50;
        let err = ConfigValidator::validate(&config).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref field, .. } if field == "graphs.width"));
    }

    #[test]
    fn test_rejects_bad_color() {
        let mut config = Config::default();
        config.graphs.styling.colors.highlight_min = "green".to_string();
        let err = ConfigValidator::validate(&config).unwrap_err();
        assert!(err.to_string().contains("highlight_min"));
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let mut config = Config::default();
        config.logging.level = "chatty".to_string();
        assert!(ConfigValidator::validate(&config).is_err());

        config.logging.level = "DEBUG".to_string();
        assert!(ConfigValidator::validate(&config).is_ok());
    }

    #[test]
    fn test_rejects_port_zero_and_empty_path() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(ConfigValidator::validate(&config).is_err());

        let mut config = Config::default();
        config.dataset.path = "  ".to_string();
        assert!(ConfigValidator::validate(&config).is_err());
    }
}
