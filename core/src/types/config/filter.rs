use super::SearchOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Filter configuration, persisted as cardsift.toml.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    #[serde(default)]
    pub search: SearchOptions,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl FilterConfig {
    /// Returns the config file path within the given directory.
    pub fn path(dir: &Path) -> PathBuf {
        dir.join("cardsift.toml")
    }

    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates config values and returns list of validation errors.
    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = self.search.validate();

        let class = self.display.hidden_class.trim();
        if class.is_empty() {
            errors.push("hidden_class must not be empty".to_string());
        } else if class.contains(char::is_whitespace) {
            errors.push(format!("hidden_class must be a single class, got '{class}'"));
        }

        errors
    }

    /// Returns a validated config, replacing invalid values with defaults.
    pub fn with_defaults_for_invalid(&self) -> Self {
        let class = self.display.hidden_class.trim();
        Self {
            search: self.search.with_defaults_for_invalid(),
            display: DisplayConfig {
                hidden_class: if class.is_empty() || class.contains(char::is_whitespace) {
                    DisplayConfig::default().hidden_class
                } else {
                    class.to_string()
                },
            },
        }
    }
}

/// How a filtered-out card is marked.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_hidden_class")]
    pub hidden_class: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            hidden_class: default_hidden_class(),
        }
    }
}

fn default_hidden_class() -> String {
    "d-none".to_string()
}

/// Errors that can occur when loading or saving config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
