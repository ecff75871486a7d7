//! Storage module
//!
//! This module handles the flat record files and the in-memory stores
//! loaded from them

pub mod codec;
pub mod files;
pub mod events;
pub mod registrations;
pub mod users;

// Re-export commonly used storage components
pub use files::LineFile;
pub use events::EventStore;
pub use registrations::RegistrationStore;
pub use users::UserStore;
