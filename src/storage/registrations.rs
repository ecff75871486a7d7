//! Registration store
//!
//! Registrations are matched on the exact student and event strings.

use crate::models::Registration;
use crate::storage::codec::{decode_lines, decode_registration, encode_registration};
use crate::storage::files::LineFile;
use crate::utils::errors::{EventDeskError, Result};

#[derive(Debug, Clone, Default)]
pub struct RegistrationStore {
    registrations: Vec<Registration>,
}

impl RegistrationStore {
    pub fn load(file: &LineFile) -> Result<Self> {
        let lines = file.read_lines()?;
        Ok(Self::from_lines(&lines))
    }

    pub fn from_lines(lines: &[String]) -> Self {
        Self {
            registrations: decode_lines(lines, decode_registration),
        }
    }

    pub fn save(&self, file: &LineFile) -> Result<usize> {
        file.write_lines(self.to_lines())
    }

    pub fn to_lines(&self) -> Vec<String> {
        self.registrations.iter().map(encode_registration).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Registration> {
        self.registrations.iter()
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    pub fn find_by_student_and_event(&self, student: &str, event: &str) -> Option<&Registration> {
        self.registrations.iter().find(|r| r.matches(student, event))
    }

    pub fn find_by_event(&self, event: &str) -> Vec<&Registration> {
        self.registrations.iter().filter(|r| r.event_name == event).collect()
    }

    pub fn find_by_student(&self, student: &str) -> Vec<&Registration> {
        self.registrations
            .iter()
            .filter(|r| r.student_username == student)
            .collect()
    }

    pub fn add(&mut self, registration: Registration) -> Result<()> {
        if self
            .find_by_student_and_event(&registration.student_username, &registration.event_name)
            .is_some()
        {
            return Err(EventDeskError::DuplicateRegistration {
                student: registration.student_username,
                event: registration.event_name,
            });
        }
        self.registrations.push(registration);
        Ok(())
    }

    pub fn remove(&mut self, student: &str, event: &str) -> Result<Registration> {
        let index = self
            .registrations
            .iter()
            .position(|r| r.matches(student, event))
            .ok_or_else(|| EventDeskError::RegistrationNotFound {
                student: student.to_string(),
                event: event.to_string(),
            })?;
        Ok(self.registrations.remove(index))
    }

    /// Drop every registration for `event`, returning how many were removed
    pub fn remove_all_for_event(&mut self, event: &str) -> usize {
        let before = self.registrations.len();
        self.registrations.retain(|r| r.event_name != event);
        before - self.registrations.len()
    }
}
