//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod user;
pub mod event;
pub mod registration;

// Re-export commonly used models
pub use user::{User, Role, Profile, Session};
pub use event::{Event, EventChange};
pub use registration::Registration;
