//! EventDesk
//!
//! A console event registration manager for a university campus.
//! This library provides the record stores for events, registrations and
//! users, the service layer that keeps event counts and registrations
//! consistent, and the interactive admin and student menus.

#![allow(non_snake_case)]

pub mod config;
pub mod handlers;
pub mod services;
pub mod models;
pub mod storage;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{EventDeskError, Result};

// Re-export main components for easy access
pub use services::ServiceFactory;
pub use models::Session;
pub use handlers::{run_session, Console, SessionOutcome};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
