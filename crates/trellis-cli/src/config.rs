//! CLI configuration

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::output::OutputFormat;

/// Environment variable that overrides the config file location
pub const CONFIG_ENV: &str = "TRELLIS_CONFIG";

/// Get default config file path
pub fn config_file_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return PathBuf::from(path);
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("trellis")
        .join("config.toml")
}

/// Config error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Could not serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Unknown config key: {0} (available keys: format, directed, default_weight, seed)")]
    UnknownKey(String),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

/// Configuration for the CLI
///
/// Every field can be overridden by the matching command-line flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub format: OutputFormat,
    /// Treat `--edge` arguments as one-way edges
    pub directed: bool,
    /// Weight used for edges given without one
    pub default_weight: u64,
    /// Seed for random start selection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            directed: false,
            default_weight: 1,
            seed: None,
        }
    }
}

impl Config {
    /// Load from the default location, falling back to defaults if no file exists
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_file_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&config_file_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml()?)?;
        tracing::debug!("Saved config to {:?}", path);
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        };

        match key {
            "format" => self.format = OutputFormat::parse(value).ok_or_else(invalid)?,
            "directed" => self.directed = value.parse().map_err(|_| invalid())?,
            "default_weight" => self.default_weight = value.parse().map_err(|_| invalid())?,
            "seed" => {
                self.seed = match value {
                    "" | "none" => None,
                    _ => Some(value.parse().map_err(|_| invalid())?),
                }
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.set("format", "json").unwrap();
        config.set("directed", "true").unwrap();
        config.set("seed", "42").unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.format, OutputFormat::Json);
        assert_eq!(loaded.seed, Some(42));
        assert!(std::fs::read_to_string(&path)
            .unwrap()
            .contains("format = \"json\""));
    }

    #[test]
    fn test_unknown_format_in_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "format = \"xml\"\n").unwrap();

        assert!(matches!(Config::load_from(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_partial_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "default_weight = 3\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.default_weight, 3);
        assert_eq!(config.format, OutputFormat::Table);
    }

    #[test]
    fn test_set_rejects_bad_input() {
        let mut config = Config::default();
        assert!(matches!(
            config.set("format", "xml"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert_eq!(config.format, OutputFormat::Table);
        assert!(matches!(
            config.set("default_weight", "-1"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            config.set("colour", "blue"),
            Err(ConfigError::UnknownKey(_))
        ));

        config.set("format", "JSON").unwrap();
        assert_eq!(config.format, OutputFormat::Json);

        config.set("seed", "9").unwrap();
        config.set("seed", "none").unwrap();
        assert_eq!(config.seed, None);
    }
}
