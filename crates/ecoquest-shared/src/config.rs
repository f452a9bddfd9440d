//! EcoQuest configuration.
//!
//! Config file: $XDG_CONFIG_HOME/ecoquest/config.toml or
//! ~/.config/ecoquest/config.toml. Every field has a default, so a missing
//! file or a partial one is fine; a malformed one is an error.

use crate::error::EcoQuestError;
use crate::DEFAULT_KEY_PREFIX;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Where progress slots live
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory for slot files; platform data dir when unset
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Slot key prefix, joined to the user id with an underscore
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,
}

fn default_key_prefix() -> String {
    DEFAULT_KEY_PREFIX.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            key_prefix: default_key_prefix(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// tracing filter directive, e.g. "info" or "ecoquest_shared=debug"
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level() }
    }
}

/// Main EcoQuest configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EcoQuestConfig {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl EcoQuestConfig {
    /// Default user config path
    pub fn user_config_path() -> Option<PathBuf> {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            if !xdg.is_empty() {
                return Some(PathBuf::from(xdg).join("ecoquest").join("config.toml"));
            }
        }
        dirs::config_dir().map(|dir| dir.join("ecoquest").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// Priority:
    /// 1. Explicit path (must exist)
    /// 2. User config, if present
    /// 3. Defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self, EcoQuestError> {
        if let Some(path) = explicit {
            return Self::load_file(path);
        }

        match Self::user_config_path() {
            Some(path) if path.exists() => Self::load_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_file(path: &Path) -> Result<Self, EcoQuestError> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, EcoQuestError> {
        Ok(toml::from_str(contents)?)
    }

    /// Directory holding slot files
    pub fn data_dir(&self) -> PathBuf {
        match &self.storage.data_dir {
            Some(dir) => dir.clone(),
            None => dirs::data_dir()
                .map(|d| d.join("ecoquest"))
                .unwrap_or_else(|| PathBuf::from(".ecoquest")),
        }
    }
}
