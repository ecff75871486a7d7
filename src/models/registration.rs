//! Registration model

use serde::{Deserialize, Serialize};

/// A binding of one student to one event, by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub student_username: String,
    pub event_name: String,
    /// `DD-MM-YYYY HH:MM`
    pub registration_date: String,
}

impl Registration {
    pub fn new(student: impl Into<String>, event: impl Into<String>, registration_date: impl Into<String>) -> Self {
        Self {
            student_username: student.into(),
            event_name: event.into(),
            registration_date: registration_date.into(),
        }
    }

    pub fn matches(&self, student: &str, event: &str) -> bool {
        self.student_username == student && self.event_name == event
    }
}
