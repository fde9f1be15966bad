//! CLI configuration management.
//!
//! Loads the optional `phoenix.toml` settings file; every field has a
//! default so a missing file simply yields the default configuration.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// CLI settings.
#[derive(Debug, Clone, Deserialize)]
pub struct CliConfig {
    /// Default output format for commands that render results.
    #[serde(default = "default_output_format")]
    pub output_format: String,

    /// Log level used when RUST_LOG is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_output_format() -> String {
    "table".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            output_format: default_output_format(),
            log_level: default_log_level(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from a TOML file, falling back to defaults when
    /// the file does not exist.
    pub fn load_or_default(path: &str) -> Result<Self, ConfigError> {
        let path = Path::new(path);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Could not read the configuration file
    #[error("Could not read configuration: {0}")]
    Io(String),

    /// Could not parse the configuration file
    #[error("Could not parse configuration: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.output_format, "table");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = CliConfig::load_or_default("does-not-exist.toml").unwrap();
        assert_eq!(config.output_format, "table");
    }

    #[test]
    fn test_parse_from_toml() {
        let parsed: CliConfig = toml::from_str("output_format = \"json\"").unwrap();
        assert_eq!(parsed.output_format, "json");
        assert_eq!(parsed.log_level, "info");
    }
}
