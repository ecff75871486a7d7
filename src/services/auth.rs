//! Authentication service implementation
//!
//! This service checks credentials against the users file and hands out a
//! role-tagged session. Counting attempts is left to the login prompt, which
//! reads the limit from [`AuthService::max_attempts`].

use tracing::{debug, info, warn};
use crate::config::settings::Settings;
use crate::models::Session;
use crate::storage::{LineFile, UserStore};
use crate::utils::errors::{EventDeskError, Result};

#[derive(Debug, Clone)]
pub struct AuthService {
    users_file: LineFile,
    max_attempts: u32,
}

impl AuthService {
    /// Create a new AuthService instance
    pub fn new(settings: &Settings) -> Self {
        Self {
            users_file: LineFile::new(settings.storage.users_path()),
            max_attempts: settings.auth.max_login_attempts,
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Check credentials and open a session
    pub fn login(&self, username: &str, password: &str) -> Result<Session> {
        debug!(username = username, "Checking credentials");

        let users = UserStore::load(&self.users_file)?;
        match users.authenticate(username, password) {
            Some(user) => {
                let session = Session::from(user);
                info!(username = username, role = %session.role(), "Login successful");
                Ok(session)
            }
            None => {
                warn!(username = username, "Login failed");
                Err(EventDeskError::Authentication("Invalid credentials".to_string()))
            }
        }
    }
}
