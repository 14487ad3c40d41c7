//! Core runtime configuration.
//!
//! # Responsibility
//! - Resolve database and logging locations for hosts and the smoke CLI.
//!
//! # Invariants
//! - Blank environment values are ignored, never treated as paths.
//! - `validate` runs the same level/dir checks as `init_logging`.

use crate::logging::{default_log_level, normalize_level, normalize_log_dir};
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

const DB_FILE_NAME: &str = "playertrack.sqlite3";
const LOG_DIR_NAME: &str = "playertrack-logs";

pub const ENV_DB_PATH: &str = "PLAYERTRACK_DB_PATH";
pub const ENV_LOG_LEVEL: &str = "PLAYERTRACK_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "PLAYERTRACK_LOG_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidLogLevel(String),
    InvalidLogDir(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLogLevel(message) => write!(f, "invalid log level: {message}"),
            Self::InvalidLogDir(message) => write!(f, "invalid log dir: {message}"),
        }
    }
}

impl Error for ConfigError {}

/// Paths and levels used to bootstrap the core.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    pub db_path: PathBuf,
    pub log_level: String,
    pub log_dir: PathBuf,
}

impl Default for CoreConfig {
    fn default() -> Self {
        let temp_dir = std::env::temp_dir();
        Self {
            db_path: temp_dir.join(DB_FILE_NAME),
            log_level: default_log_level().to_string(),
            log_dir: temp_dir.join(LOG_DIR_NAME),
        }
    }
}

impl CoreConfig {
    /// Defaults overridden by `PLAYERTRACK_*` environment variables.
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides looked up by environment variable name.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        if let Some(value) = non_blank(ENV_DB_PATH) {
            self.db_path = PathBuf::from(value);
        }
        if let Some(value) = non_blank(ENV_LOG_LEVEL) {
            self.log_level = value;
        }
        if let Some(value) = non_blank(ENV_LOG_DIR) {
            self.log_dir = PathBuf::from(value);
        }
        self
    }

    /// Checks that logging can be initialized from this config.
    pub fn validate(&self) -> Result<(), ConfigError> {
        normalize_level(&self.log_level).map_err(ConfigError::InvalidLogLevel)?;
        let log_dir = self.log_dir.to_string_lossy();
        normalize_log_dir(&log_dir).map_err(ConfigError::InvalidLogDir)?;
        Ok(())
    }
}
