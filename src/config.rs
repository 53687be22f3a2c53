//! Application configuration file support.
//!
//! Reads server and dataset settings from a TOML configuration file
//! (`pft.toml`), with sensible defaults when no file is present. Host and
//! port may additionally be overridden through environment variables by the
//! server binary.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("no pft.toml found in standard locations")]
    NotFound,
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub server: ServerSettings,
}

/// Dataset pipeline settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSettings {
    /// Path to the merged freedom/terrorism CSV export.
    #[serde(default = "default_data_path")]
    pub path: PathBuf,
    /// Seed for k-means initialization.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Fail the load on a zero-variance feature column instead of
    /// standardizing it to zeros.
    #[serde(default)]
    pub strict_standardization: bool,
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_data_path() -> PathBuf {
    PathBuf::from("merged_freedom_gtd.csv")
}

fn default_seed() -> u64 {
    42
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            path: default_data_path(),
            seed: default_seed(),
            strict_standardization: false,
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: DataSettings::default(),
            server: ServerSettings::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration from the default locations.
    ///
    /// Searches for `pft.toml` in the current directory, a `config/`
    /// subdirectory, and the parent directory.
    pub fn from_default_location() -> Result<Self, ConfigError> {
        let search_paths = [
            PathBuf::from("pft.toml"),
            PathBuf::from("config/pft.toml"),
            PathBuf::from("../pft.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(ConfigError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.data.seed, 42);
        assert!(!config.data.strict_standardization);
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[data]
path = "data/merged.csv"
seed = 7
strict_standardization = true

[server]
host = "127.0.0.1"
port = 9000
"#;

        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.data.path, PathBuf::from("data/merged.csv"));
        assert_eq!(config.data.seed, 7);
        assert!(config.data.strict_standardization);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9000);
    }

    #[test]
    fn test_parse_partial_config_fills_defaults() {
        let toml = r#"
[data]
path = "data/merged.csv"
"#;

        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.data.seed, 42);
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_missing_file_error() {
        let err = AppConfig::from_file("/nonexistent/pft.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read(_)));
    }
}
