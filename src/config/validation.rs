//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{EventDeskError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_storage_config(&settings.storage)?;
    validate_auth_config(&settings.auth)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate storage configuration
fn validate_storage_config(config: &super::StorageConfig) -> Result<()> {
    if config.data_dir.as_os_str().is_empty() {
        return Err(EventDeskError::Config(
            "Data directory is required".to_string()
        ));
    }

    let files = [
        ("events", &config.events_file),
        ("registrations", &config.registrations_file),
        ("users", &config.users_file),
    ];
    for (kind, file) in files {
        if file.trim().is_empty() {
            return Err(EventDeskError::Config(
                format!("File name for {} records is required", kind)
            ));
        }
    }

    if config.events_file == config.registrations_file {
        return Err(EventDeskError::Config(
            "Events and registrations must be stored in different files".to_string()
        ));
    }

    Ok(())
}

/// Validate login configuration
fn validate_auth_config(config: &super::AuthConfig) -> Result<()> {
    if config.max_login_attempts == 0 {
        return Err(EventDeskError::Config(
            "Max login attempts must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(EventDeskError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(EventDeskError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    if config.directory.is_empty() || config.file_name.is_empty() {
        return Err(EventDeskError::Config(
            "Log directory and file name are required".to_string()
        ));
    }

    Ok(())
}
