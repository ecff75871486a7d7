//! Read-only event and registration reports

use tracing::debug;
use crate::config::StorageConfig;
use crate::models::{Event, Registration};
use crate::storage::{EventStore, LineFile, RegistrationStore};
use crate::utils::errors::{EventDeskError, Result};
use crate::utils::helpers::percentage;
use crate::utils::validation::{is_valid_date, trim};

/// Registered/capacity figures of one event
#[derive(Debug, Clone, PartialEq)]
pub struct EventOccupancy {
    pub name: String,
    pub registered: u32,
    pub capacity: u32,
    pub occupancy: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventStatistics {
    pub total_events: usize,
    pub total_capacity: u64,
    pub total_registered: u64,
    pub overall_occupancy: f64,
    pub per_event: Vec<EventOccupancy>,
}

/// Number of registration records carrying an event's exact name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationCount {
    pub event_name: String,
    pub registrations: usize,
}

/// A student's registration with the event it points at, if it still exists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRegistration {
    pub registration: Registration,
    pub event: Option<Event>,
}

#[derive(Debug, Clone)]
pub struct ReportService {
    events_file: LineFile,
    registrations_file: LineFile,
}

impl ReportService {
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            events_file: LineFile::new(config.events_path()),
            registrations_file: LineFile::new(config.registrations_path()),
        }
    }

    fn events(&self) -> Result<EventStore> {
        EventStore::load(&self.events_file)
    }

    fn registrations(&self) -> Result<RegistrationStore> {
        RegistrationStore::load(&self.registrations_file)
    }

    pub fn list_events(&self) -> Result<Vec<Event>> {
        Ok(self.events()?.into_events())
    }

    pub fn event(&self, name: &str) -> Result<Event> {
        self.events()?
            .find_by_name(name)
            .cloned()
            .ok_or_else(|| EventDeskError::EventNotFound(name.to_string()))
    }

    /// Events whose name contains `term`, ignoring case
    pub fn search_events(&self, term: &str) -> Result<Vec<Event>> {
        let term = trim(term);
        if term.is_empty() {
            return Err(EventDeskError::InvalidInput("Search term cannot be empty".to_string()));
        }

        let events = self.events()?;
        let found: Vec<Event> = events.search(term).into_iter().cloned().collect();
        debug!(term = term, matches = found.len(), "Event search");
        Ok(found)
    }

    /// Events on exactly `date`
    pub fn events_on(&self, date: &str) -> Result<Vec<Event>> {
        let date = trim(date);
        if !is_valid_date(date) {
            return Err(EventDeskError::InvalidDate(date.to_string()));
        }

        Ok(self.events()?.on_date(date).into_iter().cloned().collect())
    }

    pub fn statistics(&self) -> Result<EventStatistics> {
        let events = self.events()?;

        let per_event: Vec<EventOccupancy> = events
            .iter()
            .map(|e| EventOccupancy {
                name: e.name.clone(),
                registered: e.registered_count,
                capacity: e.capacity,
                occupancy: e.occupancy_percent(),
            })
            .collect();
        let total_capacity: u64 = per_event.iter().map(|e| u64::from(e.capacity)).sum();
        let total_registered: u64 = per_event.iter().map(|e| u64::from(e.registered)).sum();

        Ok(EventStatistics {
            total_events: per_event.len(),
            total_capacity,
            total_registered,
            overall_occupancy: percentage(total_registered, total_capacity),
            per_event,
        })
    }

    /// Per event, how many registration records carry its name
    pub fn registration_summary(&self) -> Result<Vec<RegistrationCount>> {
        let events = self.events()?;
        let registrations = self.registrations()?;

        Ok(events
            .iter()
            .map(|e| RegistrationCount {
                event_name: e.name.clone(),
                registrations: registrations.find_by_event(&e.name).len(),
            })
            .collect())
    }

    /// Registrations for one event, in file order
    pub fn participants(&self, event_name: &str) -> Result<Vec<Registration>> {
        let event = self.event(event_name)?;
        let registrations = self.registrations()?;
        Ok(registrations.find_by_event(&event.name).into_iter().cloned().collect())
    }

    pub fn student_registrations(&self, student: &str) -> Result<Vec<StudentRegistration>> {
        let events = self.events()?;
        let registrations = self.registrations()?;

        Ok(registrations
            .find_by_student(student)
            .into_iter()
            .map(|r| StudentRegistration {
                registration: r.clone(),
                event: events.find_by_name(&r.event_name).cloned(),
            })
            .collect())
    }
}
