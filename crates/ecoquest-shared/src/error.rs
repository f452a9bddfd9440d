//! Error types for EcoQuest.
//!
//! Progression operations themselves never fail; these errors only surface at
//! the storage, config, and parsing boundaries.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EcoQuestError {
    #[error("Unknown game: {0}")]
    UnknownGame(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EcoQuestError {
    pub fn code(&self) -> i32 {
        match self {
            EcoQuestError::UnknownGame(_) => -32001,
            EcoQuestError::Storage(_) => -32002,
            EcoQuestError::Config(_) => -32003,
            EcoQuestError::Io(_) => -32006,
            EcoQuestError::Json(_) => -32700,
        }
    }
}
