//! Console handlers module
//!
//! This module contains the interactive console front end:
//! - A line-based console over any reader and writer
//! - Table and report rendering
//! - Login and the role-specific dashboards

pub mod console;
pub mod display;
pub mod commands;

// Re-export commonly used handler types
pub use console::Console;
pub use commands::{run_session, SessionOutcome};
