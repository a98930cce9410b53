//! Configuration schema definitions using serde.

use bikedash_common::LoggingConfig;
use serde::{Deserialize, Serialize};

/// Main configuration structure for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Dataset configuration.
    pub dataset: DatasetConfig,
    /// HTTP server configuration.
    pub server: ServerConfig,
    /// Page chrome configuration.
    pub page: PageConfig,
    /// Graph configuration.
    pub graphs: GraphsConfig,
    /// Logging configuration.
    pub logging: LoggingSettings,
}

/// Dataset configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Path to the hourly rentals CSV file.
    pub path: String,
}

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

impl ServerConfig {
    /// The `host:port` string handed to the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Page chrome configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Header shown above the metrics.
    pub title: String,
    /// Image shown at the top of the sidebar.
    pub logo_url: String,
}

/// Graph configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphsConfig {
    /// Chart width in pixels.
    pub width: u32,
    /// Chart height in pixels.
    pub height: u32,
    /// Styling configuration.
    pub styling: StylingConfig,
}

/// Styling configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StylingConfig {
    /// Whether to draw grid lines.
    pub enable_grid: bool,
    /// Color configuration.
    pub colors: ColorsConfig,
}

/// Color configuration, all in `#RRGGBB` form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorsConfig {
    /// Bars that are neither the maximum nor the minimum.
    pub neutral: String,
    /// Bars equal to the maximum.
    pub highlight_max: String,
    /// Bars equal to the minimum.
    pub highlight_min: String,
    /// Line charts.
    pub line: String,
    /// Chart background.
    pub background: String,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error).
    pub level: String,
    /// Optional log file path.
    pub file: Option<String>,
    /// Whether to emit JSON lines.
    pub json: bool,
}

impl From<&LoggingSettings> for LoggingConfig {
    fn from(settings: &LoggingSettings) -> Self {
        Self {
            level: settings.level.clone(),
            json_format: settings.json,
            file_path: settings.file.clone(),
            ..Self::default()
        }
    }
}
