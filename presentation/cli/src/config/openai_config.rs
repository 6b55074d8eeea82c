use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config.not_found: {0}")]
    NotFound(PathBuf),
    #[error("config.unreadable: {0}")]
    Unreadable(PathBuf),
    #[error("config.invalid_json: {0}")]
    InvalidJson(PathBuf),
    #[error("config.missing_api_key")]
    MissingApiKey,
}

/// Configuration for OpenAI API access, read from `config.json`.
#[derive(Debug, Deserialize)]
pub struct OpenAIConfig {
    #[serde(default)]
    pub api_key: String,
}

impl OpenAIConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read(path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => ConfigError::NotFound(path.to_path_buf()),
            _ => ConfigError::Unreadable(path.to_path_buf()),
        })?;

        let config: OpenAIConfig = serde_json::from_slice(&contents)
            .map_err(|_| ConfigError::InvalidJson(path.to_path_buf()))?;

        if config.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }

        Ok(config)
    }
}
