//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the EventDesk application.

use tracing::{info, warn, error, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::utils::errors::{EventDeskError, Result};

/// Initialize logging based on configuration
///
/// Log records go to a daily rolling file. Console output goes to stderr
/// and only when enabled, so it never interleaves with the menus on stdout.
/// The returned guard flushes the file writer when dropped and must be held
/// for the lifetime of the program.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| EventDeskError::Config(format!("Invalid log filter '{}': {}", config.level, e)))?;

    let file_appender = tracing_appender::rolling::daily(&config.directory, &config.file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let console_layer = config
        .console
        .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));
    let json_layer = config
        .json
        .then(|| tracing_subscriber::fmt::layer().json().with_writer(non_blocking.clone()));
    let text_layer = (!config.json)
        .then(|| tracing_subscriber::fmt::layer().with_ansi(false).with_writer(non_blocking));

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .with(text_layer)
        .try_init()
        .map_err(|e| EventDeskError::Config(format!("Logging already initialized: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log student actions with structured data
pub fn log_user_action(username: &str, action: &str, details: Option<&str>) {
    info!(
        username = username,
        action = action,
        details = details,
        "User action performed"
    );
}

/// Log event management actions
pub fn log_event_action(event: &str, action: &str, details: Option<&str>) {
    info!(
        event = event,
        action = action,
        details = details,
        "Event action performed"
    );
}

/// Log admin actions
pub fn log_admin_action(admin: &str, action: &str, target: Option<&str>) {
    warn!(
        admin = admin,
        action = action,
        target = target,
        "Admin action performed"
    );
}

/// Log record file operations
pub fn log_storage_operation(operation: &str, path: &str, records: usize, success: bool) {
    if success {
        debug!(
            operation = operation,
            path = path,
            records = records,
            "Storage operation completed"
        );
    } else {
        error!(
            operation = operation,
            path = path,
            records = records,
            "Storage operation failed"
        );
    }
}
