use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Where the move history lives.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    pub path: PathBuf,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        HistoryConfig {
            path: PathBuf::from("connect4.game"),
        }
    }
}

/// How the board is printed.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: bool,
    pub legend: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            color: true,
            legend: true,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub history: HistoryConfig,
    pub display: DisplayConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history.path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "history.path must not be empty".into(),
            ));
        }
        if self.history.path.is_dir() {
            return Err(ConfigError::Validation(format!(
                "history.path {} is a directory",
                self.history.path.display()
            )));
        }
        Ok(())
    }
}
