//! Services module
//!
//! This module contains business logic services

pub mod auth;
pub mod registration;
pub mod reports;
pub mod user;

// Re-export commonly used services
pub use auth::AuthService;
pub use registration::{RegistrationService, DeletedEvent};
pub use reports::{ReportService, EventStatistics, EventOccupancy, RegistrationCount, StudentRegistration};
pub use user::UserService;

use crate::config::settings::Settings;

/// Service factory for creating and managing all services
#[derive(Debug, Clone)]
pub struct ServiceFactory {
    pub auth_service: AuthService,
    pub registration_service: RegistrationService,
    pub report_service: ReportService,
    pub user_service: UserService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services pointed at the
    /// configured record files
    pub fn new(settings: &Settings) -> Self {
        Self {
            auth_service: AuthService::new(settings),
            registration_service: RegistrationService::new(&settings.storage),
            report_service: ReportService::new(&settings.storage),
            user_service: UserService::new(&settings.storage),
        }
    }
}
