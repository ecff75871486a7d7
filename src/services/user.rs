//! User service implementation
//!
//! This service handles student account creation and the user listing
//! shown to administrators.

use tracing::debug;
use crate::config::StorageConfig;
use crate::models::User;
use crate::storage::codec::encode_user;
use crate::storage::{LineFile, UserStore};
use crate::utils::errors::Result;
use crate::utils::logging::log_admin_action;

/// User service for managing user operations
#[derive(Debug, Clone)]
pub struct UserService {
    users_file: LineFile,
}

impl UserService {
    /// Create a new UserService instance
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            users_file: LineFile::new(config.users_path()),
        }
    }

    /// Create a student account on behalf of `admin`
    pub fn add_student(&self, admin: &str, username: &str, password: &str, full_name: &str) -> Result<User> {
        debug!(admin = admin, "Adding student account");

        // undecodable lines are written back unchanged
        let mut lines = self.users_file.read_lines()?;
        let mut users = UserStore::from_lines(&lines);
        let user = users.add_student(username, password, full_name)?.clone();
        lines.push(encode_user(&user));
        self.users_file.write_lines(&lines)?;

        log_admin_action(admin, "add_student", Some(&user.username));
        Ok(user)
    }

    /// All users in file order
    pub fn list_users(&self) -> Result<Vec<User>> {
        let users = UserStore::load(&self.users_file)?;
        Ok(users.iter().cloned().collect())
    }
}
