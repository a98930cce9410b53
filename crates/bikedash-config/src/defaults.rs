//! Default values for every configuration section.

use crate::schema::*;

/// Default sidebar logo.
pub const DEFAULT_LOGO_URL: &str = "https://media.istockphoto.com/id/854733622/vector/bicycle-icon.jpg?s=612x612&w=0&k=20&c=cu34k4KEV5VYWwwVbMAmPogLJmh-OBITXEd1d9rWfrw=";

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset: DatasetConfig::default(),
            server: ServerConfig::default(),
            page: PageConfig::default(),
            graphs: GraphsConfig::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: "dashboard/hour.csv".to_string(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8501,
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "Bike Sharing Dashboard".to_string(),
            logo_url: DEFAULT_LOGO_URL.to_string(),
        }
    }
}

impl Default for GraphsConfig {
    fn default() -> Self {
        Self {
            width: 960,
            height: 480,
            styling: StylingConfig::default(),
        }
    }
}

impl Default for StylingConfig {
    fn default() -> Self {
        Self {
            enable_grid: false,
            colors: ColorsConfig::default(),
        }
    }
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            neutral: "#90CAF9".to_string(),
            highlight_max: "#EF5350".to_string(),
            highlight_min: "#66BB6A".to_string(),
            line: "#90CAF9".to_string(),
            background: "#FFFFFF".to_string(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            json: false,
        }
    }
}
