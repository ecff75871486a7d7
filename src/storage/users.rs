//! User store
//!
//! Accounts in the comma-delimited users file.

use tracing::info;
use crate::models::{Role, User};
use crate::storage::codec::{decode_lines, decode_user, RECORD_DELIMITER, USER_DELIMITER};
use crate::storage::files::LineFile;
use crate::utils::errors::{EventDeskError, Result};
use crate::utils::validation::trim;

#[derive(Debug, Clone, Default)]
pub struct UserStore {
    users: Vec<User>,
}

impl UserStore {
    pub fn load(file: &LineFile) -> Result<Self> {
        let lines = file.read_lines()?;
        Ok(Self::from_lines(&lines))
    }

    pub fn from_lines(lines: &[String]) -> Self {
        Self {
            users: decode_lines(lines, decode_user),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.users.iter()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn find_by_username(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|u| u.username == username)
    }

    /// First record with this username and password
    pub fn authenticate(&self, username: &str, password: &str) -> Option<&User> {
        self.users
            .iter()
            .find(|u| u.username == username && u.authenticate(password))
    }

    /// Add a student account
    pub fn add_student(&mut self, username: &str, password: &str, full_name: &str) -> Result<&User> {
        let username = trim(username);
        let password = trim(password);
        let full_name = trim(full_name);

        for (label, value) in [("Username", username), ("Password", password), ("Full name", full_name)] {
            if value.is_empty() {
                return Err(EventDeskError::InvalidInput(format!("{} cannot be empty", label)));
            }
            if value.contains(USER_DELIMITER) || value.contains(RECORD_DELIMITER) {
                return Err(EventDeskError::InvalidInput(format!(
                    "{} cannot contain '{}' or '{}'",
                    label, USER_DELIMITER, RECORD_DELIMITER
                )));
            }
        }

        if self.find_by_username(username).is_some() {
            return Err(EventDeskError::DuplicateUsername(username.to_string()));
        }

        self.users.push(User {
            username: username.to_string(),
            password: password.to_string(),
            full_name: full_name.to_string(),
            role: Role::Student,
        });
        info!(username = username, "Student account added");

        Ok(&self.users[self.users.len() - 1])
    }
}
