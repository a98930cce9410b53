//! Configuration loading utilities

use crate::schema::Config;
use crate::validator::ConfigValidator;
use bikedash_common::DashError;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_VAR: &str = "BIKEDASH_CONFIG_PATH";

/// Files probed in the working directory when no path is given.
const DEFAULT_CONFIG_FILES: [&str; 2] = ["bikedash.yaml", "bikedash.yml"];

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// A field holds an unusable value
    #[error("Invalid configuration value for '{field}': {message}")]
    Invalid {
        /// Dotted path of the offending field.
        field: String,
        /// What is wrong with it.
        message: String,
    },

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        /// Variable name.
        var: String,
        /// Underlying parse failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<ConfigError> for DashError {
    fn from(err: ConfigError) -> Self {
        DashError::config_with_source("Configuration could not be loaded", err)
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        Self::load_config_with(path, |key| env::var(key).ok())
    }

    /// Same as [`ConfigLoader::load_config`] with an explicit variable lookup.
    pub fn load_config_with<P, F>(path: P, lookup: F) -> Result<Config, ConfigError>
    where
        P: AsRef<Path>,
        F: Fn(&str) -> Option<String>,
    {
        let content = std::fs::read_to_string(path.as_ref())?;
        let mut config: Config = serde_yaml::from_str(&content)?;
        debug!(path = %path.as_ref().display(), "parsed configuration file");

        Self::apply_overrides(&mut config, lookup)?;
        ConfigValidator::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from the environment and the usual file locations.
    ///
    /// Order: `BIKEDASH_CONFIG_PATH`, then `bikedash.yaml`/`bikedash.yml` in
    /// the working directory, then built-in defaults.
    pub fn load() -> Result<Config, ConfigError> {
        Self::load_with(|key| env::var(key).ok())
    }

    /// Same as [`ConfigLoader::load`] with an explicit variable lookup.
    pub fn load_with<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match Self::locate(&lookup) {
            Some(path) => {
                info!(path = %path.display(), "loading configuration");
                Self::load_config_with(path, lookup)
            }
            None => {
                info!("no configuration file found, using defaults");
                let mut config = Config::default();
                Self::apply_overrides(&mut config, lookup)?;
                ConfigValidator::validate(&config)?;
                Ok(config)
            }
        }
    }

    fn locate<F>(lookup: &F) -> Option<PathBuf>
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup(CONFIG_PATH_VAR).map(PathBuf::from).or_else(|| {
            DEFAULT_CONFIG_FILES
                .iter()
                .map(PathBuf::from)
                .find(|candidate| candidate.exists())
        })
    }

    /// Apply environment variable overrides to configuration
    pub fn apply_overrides<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("BIKEDASH_DATASET_PATH") {
            config.dataset.path = path;
        }

        if let Some(host) = lookup("BIKEDASH_HOST") {
            config.server.host = host;
        }

        if let Some(port) = lookup("BIKEDASH_PORT") {
            config.server.port = port.trim().parse().map_err(|e| ConfigError::EnvParseError {
                var: "BIKEDASH_PORT".to_string(),
                source: Box::new(e),
            })?;
        }

        if let Some(level) = lookup("BIKEDASH_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(logo_url) = lookup("BIKEDASH_LOGO_URL") {
            config.page.logo_url = logo_url;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file
    }

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_load_valid_yaml_config() {
        let yaml = "dataset:\n  path: data/hour.csv\nserver:\n  host: 0.0.0.0\n  port: 9000\ngraphs:\n  width: 1200\n  height: 600\n  styling:\n    enable_grid: true\n    colors:\n      neutral: \"#123456\"\nlogging:\n  level: debug\n";

        let file = create_test_config_file(yaml);
        let config = ConfigLoader::load_config_with(file.path(), vars(&[]))
            .expect("Failed to load config");

        assert_eq!(config.dataset.path, "data/hour.csv");
        assert_eq!(config.server.bind_address(), "0.0.0.0:9000");
        assert_eq!(config.graphs.width, 1200);
        assert!(config.graphs.styling.enable_grid);
        assert_eq!(config.graphs.styling.colors.neutral, "#123456");
        // Unspecified colors keep their defaults
        assert_eq!(config.graphs.styling.colors.highlight_max, "#EF5350");
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_load_minimal_config() {
        let file = create_test_config_file("server:\n  port: 8080\n");
        let config = ConfigLoader::load_config_with(file.path(), vars(&[]))
            .expect("Failed to load config");

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.dataset.path, "dashboard/hour.csv");
        assert_eq!(config.page.title, "Bike Sharing Dashboard");
    }

    #[test]
    fn test_invalid_yaml() {
        let file = create_test_config_file("server:\n  port: [unclosed");
        let result = ConfigLoader::load_config_with(file.path(), vars(&[]));
        assert!(matches!(result.unwrap_err(), ConfigError::ParseError(_)));
    }

    #[test]
    fn test_validation_error() {
        let file = create_test_config_file("graphs:\n  width: 20\n");
        let result = ConfigLoader::load_config_with(file.path(), vars(&[]));
        assert!(matches!(result.unwrap_err(), ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_environment_variable_overrides() {
        let file = create_test_config_file("server:\n  port: 9000\n");
        let lookup = vars(&[
            ("BIKEDASH_DATASET_PATH", "/srv/hour.csv"),
            ("BIKEDASH_HOST", "0.0.0.0"),
            ("BIKEDASH_PORT", "8600"),
            ("BIKEDASH_LOG_LEVEL", "warn"),
            ("BIKEDASH_LOGO_URL", "https://example.com/logo.png"),
        ]);
        let config = ConfigLoader::load_config_with(file.path(), lookup)
            .expect("Failed to load config");

        assert_eq!(config.dataset.path, "/srv/hour.csv");
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8600);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.page.logo_url, "https://example.com/logo.png");
    }

    #[test]
    fn test_env_parse_error() {
        let mut config = Config::default();
        let result = ConfigLoader::apply_overrides(&mut config, vars(&[("BIKEDASH_PORT", "http")]));
        assert!(matches!(result.unwrap_err(), ConfigError::EnvParseError { .. }));
    }

    #[test]
    fn test_missing_config_file() {
        let result = ConfigLoader::load_config_with("/nonexistent/path/bikedash.yaml", vars(&[]));
        assert!(matches!(result.unwrap_err(), ConfigError::IoError(_)));
    }

    #[test]
    fn test_explicit_path_variable() {
        let file = create_test_config_file("server:\n  port: 7000\n");
        let path = file.path().to_string_lossy().to_string();
        let config = ConfigLoader::load_with(vars(&[(CONFIG_PATH_VAR, path.as_str())]))
            .expect("Failed to load config");
        assert_eq!(config.server.port, 7000);
    }

    #[test]
    fn test_config_error_converts_to_dash_error() {
        let err: DashError = ConfigError::Invalid {
            field: "server.port".to_string(),
            message: "zero".to_string(),
        }
        .into();
        assert!(err.to_string().starts_with("Configuration error"));
    }
}
