//! Runtime configuration
//!
//! Values come from the process environment, optionally seeded by a `.env`
//! file in the working directory.

use std::path::PathBuf;
use std::str::FromStr;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::err::{MamsError, Result};

pub const DATA_FILE_VAR: &str = "MAMS_DATA_FILE";
pub const LOG_LEVEL_VAR: &str = "MAMS_LOG_LEVEL";
pub const LOG_FILE_VAR: &str = "MAMS_LOG_FILE";
pub const DEPARTMENT_CODE_VAR: &str = "MAMS_DEPARTMENT_CODE";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// JSON file holding students, appeals and modules
    pub data_file: PathBuf,
    pub log_level: LevelFilter,
    /// Extra log destination next to stderr
    pub log_file: Option<PathBuf>,
    /// Substring that marks a `clash mod/` value as a module code
    pub department_code: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("data/mams.json"),
            log_level: LevelFilter::Info,
            log_file: None,
            department_code: "cs".to_string(),
        }
    }
}

impl Config {
    /// Reads the configuration from the environment after loading `.env`.
    pub fn from_env() -> Result<Self> {
        // a missing .env file is fine
        dotenv::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from `lookup`, unset keys keep their defaults.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(data_file) = lookup(DATA_FILE_VAR) {
            if data_file.trim().is_empty() {
                return Err(MamsError::Config(format!("{} must not be empty", DATA_FILE_VAR)));
            }
            config.data_file = PathBuf::from(data_file.trim());
        }

        if let Some(level) = lookup(LOG_LEVEL_VAR) {
            config.log_level = LevelFilter::from_str(level.trim()).map_err(|_| {
                MamsError::Config(format!(
                    "{} must be one of off, error, warn, info, debug, trace, got {:?}",
                    LOG_LEVEL_VAR, level
                ))
            })?;
        }

        config.log_file = lookup(LOG_FILE_VAR)
            .map(|file| file.trim().to_string())
            .filter(|file| !file.is_empty())
            .map(PathBuf::from);

        if let Some(code) = lookup(DEPARTMENT_CODE_VAR) {
            let code = code.trim();
            if code.is_empty() {
                return Err(MamsError::Config(format!(
                    "{} must not be empty",
                    DEPARTMENT_CODE_VAR
                )));
            }
            config.department_code = code.to_lowercase();
        }

        Ok(config)
    }
}
