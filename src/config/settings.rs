//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub storage: StorageConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
}

/// Record file locations
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
    pub events_file: String,
    pub registrations_file: String,
    pub users_file: String,
}

/// Login configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AuthConfig {
    pub max_login_attempts: u32,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub directory: String,
    pub file_name: String,
    /// Also mirror records to stderr
    pub console: bool,
    /// Write the log file as JSON lines
    pub json: bool,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    ///
    /// Reads an optional `config.toml` from the working directory, then
    /// applies `EVENTDESK_*` overrides (`EVENTDESK_STORAGE__DATA_DIR=...`).
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::from_file("config")
    }

    /// Load settings from the named configuration file (extension optional)
    /// with environment overrides on top
    pub fn from_file(name: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(name).required(false))
            .add_source(
                config::Environment::with_prefix("EVENTDESK")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::EventDeskError> {
        super::validation::validate_settings(self)
    }
}

impl StorageConfig {
    /// Storage rooted at `data_dir` with the default file names
    pub fn in_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    pub fn events_path(&self) -> PathBuf {
        self.data_dir.join(&self.events_file)
    }

    pub fn registrations_path(&self) -> PathBuf {
        self.data_dir.join(&self.registrations_file)
    }

    pub fn users_path(&self) -> PathBuf {
        self.data_dir.join(&self.users_file)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            events_file: "events.txt".to_string(),
            registrations_file: "registrations.txt".to_string(),
            users_file: "users.txt".to_string(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self { max_login_attempts: 3 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: "logs".to_string(),
            file_name: "eventdesk.log".to_string(),
            console: false,
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let storage = StorageConfig::default();
        assert_eq!(storage.events_path(), PathBuf::from("data/events.txt"));
        assert_eq!(storage.registrations_path(), PathBuf::from("data/registrations.txt"));
        assert_eq!(storage.users_path(), PathBuf::from("data/users.txt"));
    }

    #[test]
    fn test_in_dir_keeps_file_names() {
        let storage = StorageConfig::in_dir("/tmp/fixture");
        assert_eq!(storage.events_path(), PathBuf::from("/tmp/fixture/events.txt"));
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.auth.max_login_attempts, 3);
        assert_eq!(settings.logging.level, "info");
        assert!(!settings.logging.console);
        assert!(settings.validate().is_ok());
    }
}
