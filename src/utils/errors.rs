//! Error handling for EventDesk
//!
//! This module defines the main error type used throughout the application
//! and provides a unified error handling strategy.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for EventDesk application
#[derive(Error, Debug)]
pub enum EventDeskError {
    #[error("Malformed record '{line}': {reason}")]
    Parse { line: String, reason: String },

    #[error("An event named '{0}' already exists")]
    DuplicateName(String),

    #[error("{student} is already registered for '{event}'")]
    DuplicateRegistration { student: String, event: String },

    #[error("Username '{0}' already exists")]
    DuplicateUsername(String),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("No registration of {student} for '{event}'")]
    RegistrationNotFound { student: String, event: String },

    #[error("Event '{0}' is full, no available seats")]
    EventFull(String),

    #[error("Capacity must be greater than 0 (got {0})")]
    InvalidCapacity(i64),

    #[error("New capacity {requested} cannot be less than registered count ({registered})")]
    CapacityBelowRegistered { requested: u32, registered: u32 },

    #[error("Invalid date '{0}', use DD-MM-YYYY with a year from 2025")]
    InvalidDate(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Storage error on {}: {source}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for EventDesk operations
pub type Result<T> = std::result::Result<T, EventDeskError>;

impl EventDeskError {
    pub(crate) fn parse(line: &str, reason: impl Into<String>) -> Self {
        EventDeskError::Parse {
            line: line.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn persistence(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        EventDeskError::Persistence {
            path: path.into(),
            source,
        }
    }

    /// Check if the error is recoverable
    ///
    /// A recoverable error may succeed when retried after reloading state.
    pub fn is_recoverable(&self) -> bool {
        match self {
            EventDeskError::Parse { .. } => false,
            EventDeskError::DuplicateName(_) => false,
            EventDeskError::DuplicateRegistration { .. } => false,
            EventDeskError::DuplicateUsername(_) => false,
            EventDeskError::EventNotFound(_) => false,
            EventDeskError::RegistrationNotFound { .. } => false,
            EventDeskError::EventFull(_) => true,
            EventDeskError::InvalidCapacity(_) => false,
            EventDeskError::CapacityBelowRegistered { .. } => false,
            EventDeskError::InvalidDate(_) => false,
            EventDeskError::InvalidInput(_) => false,
            EventDeskError::Persistence { .. } => true,
            EventDeskError::Config(_) => false,
            EventDeskError::Authentication(_) => true,
            EventDeskError::Io(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            EventDeskError::Persistence { .. } => ErrorSeverity::Critical,
            EventDeskError::Config(_) => ErrorSeverity::Critical,
            EventDeskError::Io(_) => ErrorSeverity::Error,
            EventDeskError::Parse { .. } => ErrorSeverity::Error,
            EventDeskError::Authentication(_) => ErrorSeverity::Warning,
            EventDeskError::EventFull(_) => ErrorSeverity::Warning,
            EventDeskError::DuplicateRegistration { .. } => ErrorSeverity::Warning,
            _ => ErrorSeverity::Info,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
