//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use crate::error::AppError;

const DEFAULT_DATA_DIR: &str = ".king-scoreboard";

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the persisted records (one JSON file per key).
    pub data_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `KING_DATA_DIR` overrides the default data directory.
    pub fn from_env() -> Result<Self, AppError> {
        let data_dir = env::var("KING_DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());
        if data_dir.trim().is_empty() {
            return Err(AppError::config("KING_DATA_DIR must not be empty"));
        }
        Ok(Self {
            data_dir: PathBuf::from(data_dir),
        })
    }
}
