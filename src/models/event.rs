//! Event model

use serde::{Deserialize, Serialize};
use crate::utils::helpers::percentage;

/// A scheduled activity with bounded capacity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    /// `DD-MM-YYYY`
    pub date: String,
    pub venue: String,
    pub capacity: u32,
    pub registered_count: u32,
}

impl Event {
    /// Create an event with no registrations
    pub fn new(name: impl Into<String>, date: impl Into<String>, venue: impl Into<String>, capacity: u32) -> Self {
        Self {
            name: name.into(),
            date: date.into(),
            venue: venue.into(),
            capacity,
            registered_count: 0,
        }
    }

    pub fn available_seats(&self) -> u32 {
        self.capacity.saturating_sub(self.registered_count)
    }

    pub fn has_available_seats(&self) -> bool {
        self.registered_count < self.capacity
    }

    pub fn occupancy_percent(&self) -> f64 {
        percentage(self.registered_count.into(), self.capacity.into())
    }
}

/// A single field change applied to an existing event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventChange {
    Name(String),
    Date(String),
    Venue(String),
    Capacity(i64),
}

impl EventChange {
    pub fn field(&self) -> &'static str {
        match self {
            EventChange::Name(_) => "name",
            EventChange::Date(_) => "date",
            EventChange::Venue(_) => "venue",
            EventChange::Capacity(_) => "capacity",
        }
    }
}
