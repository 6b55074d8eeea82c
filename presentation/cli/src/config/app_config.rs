use std::env;
use std::path::PathBuf;

use anyhow::Context;
use openai::client::DEFAULT_BASE_URL;

const CONFIG_DIR_NAME: &str = ".gogpt";
const CONFIG_FILE_NAME: &str = "config.json";
const DB_FILE_NAME: &str = "qa.db";

/// Where the tool keeps its files and which completion endpoint it talks to.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub config_dir: PathBuf,
    pub base_url: String,
}

impl AppConfig {
    pub fn new(config_dir: PathBuf, base_url: String) -> Self {
        Self {
            config_dir,
            base_url,
        }
    }

    /// Load application configuration from environment variables
    ///
    /// Environment variables:
    /// - GOGPT_CONFIG_DIR: Directory holding config.json and qa.db (default: "~/.gogpt")
    /// - OPENAI_BASE_URL: Completion API base URL (default: "https://api.openai.com/v1")
    ///
    /// # Errors
    /// Returns error if no override is set and the home directory cannot be located
    pub fn from_env() -> anyhow::Result<Self> {
        let config_dir = match env::var_os("GOGPT_CONFIG_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => dirs::home_dir()
                .context("could not locate the home directory")?
                .join(CONFIG_DIR_NAME),
        };
        let base_url =
            env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Ok(Self::new(config_dir, base_url))
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }

    pub fn db_file(&self) -> PathBuf {
        self.config_dir.join(DB_FILE_NAME)
    }
}
