//! Configuration loading from environment variables.

use std::env;
use std::path::PathBuf;

use inventrent_auth::StaticCredentials;

pub const DEFAULT_DATA_FILE: &str = "inventory.csv";
pub const DEFAULT_USERNAME: &str = "admin";
pub const DEFAULT_PASSWORD: &str = "password";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Application configuration loaded from environment variables.
#[derive(Clone)]
pub struct AppConfig {
    /// Spreadsheet file holding the inventory between runs.
    pub data_file: PathBuf,
    /// Operator allowed through the login gate.
    pub username: String,
    pub password: String,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup (the environment in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_file = lookup("INVENTRENT_DATA_FILE")
            .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string());
        if data_file.trim().is_empty() {
            return Err(ConfigError::Empty("INVENTRENT_DATA_FILE"));
        }

        let username =
            lookup("INVENTRENT_USERNAME").unwrap_or_else(|| DEFAULT_USERNAME.to_string());
        if username.trim().is_empty() {
            return Err(ConfigError::Empty("INVENTRENT_USERNAME"));
        }

        Ok(Self {
            data_file: PathBuf::from(data_file),
            username,
            password: lookup("INVENTRENT_PASSWORD")
                .unwrap_or_else(|| DEFAULT_PASSWORD.to_string()),
            log_level: lookup("INVENTRENT_LOG_LEVEL")
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        })
    }

    pub fn credentials(&self) -> StaticCredentials {
        StaticCredentials::new(self.username.clone(), self.password.clone())
    }
}

impl core::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AppConfig")
            .field("data_file", &self.data_file)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("log_level", &self.log_level)
            .finish()
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable {0} must not be empty")]
    Empty(&'static str),
}
