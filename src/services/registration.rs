//! Registration service
//!
//! Every mutating operation on events and registrations goes through here.
//! Each call loads both record files fresh, applies its steps in memory and
//! writes back only when every step succeeded: events first, then
//! registrations. A failed step writes nothing.
//!
//! The two writes are independent. If the event write succeeds and the
//! registration write fails the files disagree until the next successful
//! operation; callers get `Persistence` and should reload before retrying.

use chrono::{Local, NaiveDateTime};
use tracing::{debug, error, info, warn};
use crate::config::StorageConfig;
use crate::models::{Event, EventChange, Registration};
use crate::storage::events::reject_delimiter;
use crate::storage::{EventStore, LineFile, RegistrationStore};
use crate::utils::errors::{ErrorSeverity, EventDeskError, Result};
use crate::utils::helpers::format_registration_timestamp;
use crate::utils::logging::{log_event_action, log_user_action};
use crate::utils::validation::{is_valid_date, trim};

/// Outcome of a cascading delete
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletedEvent {
    pub event: Event,
    pub registrations_removed: usize,
}

#[derive(Debug, Clone)]
pub struct RegistrationService {
    events_file: LineFile,
    registrations_file: LineFile,
}

impl RegistrationService {
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            events_file: LineFile::new(config.events_path()),
            registrations_file: LineFile::new(config.registrations_path()),
        }
    }

    fn load_events(&self) -> Result<EventStore> {
        EventStore::load(&self.events_file)
    }

    fn load(&self) -> Result<(EventStore, RegistrationStore)> {
        let events = self.load_events()?;
        let registrations = RegistrationStore::load(&self.registrations_file)?;
        Ok((events, registrations))
    }

    fn persist(&self, events: &EventStore, registrations: &RegistrationStore) -> Result<()> {
        events.save(&self.events_file)?;
        if let Err(e) = registrations.save(&self.registrations_file) {
            error!(
                events = %self.events_file.path().display(),
                registrations = %self.registrations_file.path().display(),
                "Event file written but registration file was not, record files disagree"
            );
            return Err(e);
        }
        Ok(())
    }

    /// Register `student` for the event called `event_name`, stamped with
    /// the current local time
    pub fn register_student(&self, student: &str, event_name: &str) -> Result<Registration> {
        self.register_student_at(student, event_name, Local::now().naive_local())
    }

    pub fn register_student_at(&self, student: &str, event_name: &str, at: NaiveDateTime) -> Result<Registration> {
        logged("register", self.try_register(student, event_name, at))
    }

    fn try_register(&self, student: &str, event_name: &str, at: NaiveDateTime) -> Result<Registration> {
        check_student_key(student)?;
        let (mut events, mut registrations) = self.load()?;

        let event = events
            .find_by_name(event_name)
            .ok_or_else(|| EventDeskError::EventNotFound(event_name.to_string()))?;
        let canonical = event.name.clone();

        if registrations.find_by_student_and_event(student, &canonical).is_some() {
            return Err(EventDeskError::DuplicateRegistration {
                student: student.to_string(),
                event: canonical,
            });
        }

        let event = events.reserve_seat(&canonical)?;
        let seats_left = event.available_seats();

        let registration = Registration::new(student, canonical, format_registration_timestamp(at));
        registrations.add(registration.clone())?;

        self.persist(&events, &registrations)?;

        log_user_action(student, "register", Some(&registration.event_name));
        debug!(event = %registration.event_name, seats_left = seats_left, "Seat reserved");
        Ok(registration)
    }

    /// Remove the registration of `student` for `event_name` and give the
    /// seat back if the event still exists
    pub fn unregister_student(&self, student: &str, event_name: &str) -> Result<Registration> {
        logged("unregister", self.try_unregister(student, event_name))
    }

    fn try_unregister(&self, student: &str, event_name: &str) -> Result<Registration> {
        check_student_key(student)?;
        let (mut events, mut registrations) = self.load()?;

        let removed = registrations.remove(student, event_name)?;
        if !events.release_seat(event_name) {
            warn!(student = student, event = event_name, "Registration referenced a missing event");
        }

        self.persist(&events, &registrations)?;

        log_user_action(student, "unregister", Some(event_name));
        Ok(removed)
    }

    /// Delete an event together with every registration carrying its exact
    /// stored name
    pub fn delete_event(&self, event_name: &str) -> Result<DeletedEvent> {
        logged("delete_event", self.try_delete(event_name))
    }

    fn try_delete(&self, event_name: &str) -> Result<DeletedEvent> {
        let (mut events, mut registrations) = self.load()?;

        let event = events.remove(event_name)?;
        let registrations_removed = registrations.remove_all_for_event(&event.name);

        self.persist(&events, &registrations)?;

        let details = format!("{} registrations removed", registrations_removed);
        log_event_action(&event.name, "delete", Some(&details));
        Ok(DeletedEvent { event, registrations_removed })
    }

    /// Change the capacity of an event. Registrations are not touched.
    pub fn edit_event_capacity(&self, event_name: &str, new_capacity: i64) -> Result<Event> {
        self.edit_event(event_name, EventChange::Capacity(new_capacity))
    }

    /// Apply one field change to an event and save the event file only.
    ///
    /// A rename leaves existing registrations pointing at the old name.
    pub fn edit_event(&self, event_name: &str, change: EventChange) -> Result<Event> {
        logged("edit_event", self.try_edit(event_name, change))
    }

    fn try_edit(&self, event_name: &str, change: EventChange) -> Result<Event> {
        let mut events = self.load_events()?;

        let field = change.field();
        let updated = events.update(event_name, change)?.clone();
        events.save(&self.events_file)?;

        log_event_action(&updated.name, "edit", Some(field));
        Ok(updated)
    }

    /// Validate and add a new event with no registrations
    pub fn add_event(&self, name: &str, date: &str, venue: &str, capacity: i64) -> Result<Event> {
        logged("add_event", self.try_add(name, date, venue, capacity))
    }

    fn try_add(&self, name: &str, date: &str, venue: &str, capacity: i64) -> Result<Event> {
        let (name, date, venue) = (trim(name), trim(date), trim(venue));

        if name.is_empty() {
            return Err(EventDeskError::InvalidInput("Event name cannot be empty".to_string()));
        }
        reject_delimiter("Event name", name)?;
        if !is_valid_date(date) {
            return Err(EventDeskError::InvalidDate(date.to_string()));
        }
        if venue.is_empty() {
            return Err(EventDeskError::InvalidInput("Venue cannot be empty".to_string()));
        }
        reject_delimiter("Venue", venue)?;
        let capacity = u32::try_from(capacity)
            .ok()
            .filter(|c| *c > 0)
            .ok_or(EventDeskError::InvalidCapacity(capacity))?;

        let mut events = self.load_events()?;
        let event = Event::new(name, date, venue, capacity);
        events.add(event.clone())?;
        events.save(&self.events_file)?;

        log_event_action(&event.name, "add", Some(&event.venue));
        info!(event = %event.name, capacity = capacity, "Event created");
        Ok(event)
    }
}

/// A student key must be non-empty and fit in one registration field
fn check_student_key(student: &str) -> Result<()> {
    if student.is_empty() {
        return Err(EventDeskError::InvalidInput("Student username cannot be empty".to_string()));
    }
    reject_delimiter("Student username", student)
}

/// Log a failed operation at the level its severity calls for
fn logged<T>(operation: &str, result: Result<T>) -> Result<T> {
    if let Err(e) = &result {
        match e.severity() {
            ErrorSeverity::Critical | ErrorSeverity::Error => {
                error!(operation = operation, error = %e, recoverable = e.is_recoverable(), "Operation failed")
            }
            ErrorSeverity::Warning => {
                warn!(operation = operation, error = %e, recoverable = e.is_recoverable(), "Operation rejected")
            }
            ErrorSeverity::Info => debug!(operation = operation, error = %e, "Operation rejected"),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use assert_matches::assert_matches;
    use chrono::NaiveDate;

    fn at(day: u32, hour: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 10, day)
            .and_then(|d| d.and_hms_opt(hour, min, 0))
            .unwrap()
    }

    fn fixture(events: &str, registrations: &str) -> (tempfile::TempDir, StorageConfig, RegistrationService) {
        let dir = tempfile::tempdir().unwrap();
        let config = StorageConfig::in_dir(dir.path());
        fs::write(config.events_path(), events).unwrap();
        fs::write(config.registrations_path(), registrations).unwrap();
        let service = RegistrationService::new(&config);
        (dir, config, service)
    }

    #[test]
    fn test_register_stores_canonical_name_and_timestamp() {
        let (_dir, config, service) = fixture("Tech Fest|15-11-2025|Main Hall|3|0\n", "");

        let reg = service.register_student_at("john", "tech fest", at(5, 9, 30)).unwrap();
        assert_eq!(reg, Registration::new("john", "Tech Fest", "05-10-2025 09:30"));

        assert_eq!(fs::read_to_string(config.events_path()).unwrap(), "Tech Fest|15-11-2025|Main Hall|3|1\n");
        assert_eq!(
            fs::read_to_string(config.registrations_path()).unwrap(),
            "john|Tech Fest|05-10-2025 09:30\n"
        );
    }

    #[test]
    fn test_register_error_order() {
        let (_dir, _config, service) = fixture("Full|15-11-2025|Hall|1|1\n", "john|Full|01-10-2025 10:00\n");

        assert_matches!(service.register_student("john", "Nope"), Err(EventDeskError::EventNotFound(_)));
        // already registered wins over full
        assert_matches!(
            service.register_student("john", "Full"),
            Err(EventDeskError::DuplicateRegistration { .. })
        );
        assert_matches!(service.register_student("alice", "Full"), Err(EventDeskError::EventFull(_)));
    }

    #[test]
    fn test_unregister_without_event_still_removes_registration() {
        let (_dir, config, service) = fixture("", "john|Old Name|01-10-2025 10:00\n");

        service.unregister_student("john", "Old Name").unwrap();
        assert_eq!(fs::read_to_string(config.registrations_path()).unwrap(), "");
        assert_matches!(
            service.unregister_student("john", "Old Name"),
            Err(EventDeskError::RegistrationNotFound { .. })
        );
    }

    #[test]
    fn test_rename_does_not_touch_registrations() {
        let (_dir, config, service) = fixture("Talk|15-11-2025|Hall|5|1\n", "john|Talk|01-10-2025 10:00\n");

        service.edit_event("Talk", EventChange::Name("Keynote".into())).unwrap();
        assert_eq!(
            fs::read_to_string(config.registrations_path()).unwrap(),
            "john|Talk|01-10-2025 10:00\n"
        );

        // the orphan survives deleting the renamed event
        let deleted = service.delete_event("Keynote").unwrap();
        assert_eq!(deleted.registrations_removed, 0);
        assert_eq!(
            fs::read_to_string(config.registrations_path()).unwrap(),
            "john|Talk|01-10-2025 10:00\n"
        );
    }

    #[test]
    fn test_add_event_validation() {
        let (_dir, config, service) = fixture("Talk|15-11-2025|Hall|5|0\n", "");

        assert_matches!(service.add_event(" ", "15-11-2025", "Hall", 5), Err(EventDeskError::InvalidInput(_)));
        assert_matches!(service.add_event("Expo", "15-11-2024", "Hall", 5), Err(EventDeskError::InvalidDate(_)));
        assert_matches!(service.add_event("Expo", "15-11-2025", "", 5), Err(EventDeskError::InvalidInput(_)));
        assert_matches!(service.add_event("Expo", "15-11-2025", "Hall", 0), Err(EventDeskError::InvalidCapacity(0)));
        assert_matches!(service.add_event("TALK", "15-11-2025", "Hall", 5), Err(EventDeskError::DuplicateName(_)));

        let event = service.add_event(" Expo ", "31-04-2026", " Gym ", 40).unwrap();
        assert_eq!(event, Event::new("Expo", "31-04-2026", "Gym", 40));
        assert_eq!(
            fs::read_to_string(config.events_path()).unwrap(),
            "Talk|15-11-2025|Hall|5|0\nExpo|31-04-2026|Gym|40|0\n"
        );
    }

    #[test]
    fn test_failed_edit_leaves_file_untouched() {
        let original = "Talk | 15-11-2025 | Hall | 5 | 3\n";
        let (_dir, config, service) = fixture(original, "");

        assert_matches!(
            service.edit_event_capacity("Talk", 2),
            Err(EventDeskError::CapacityBelowRegistered { requested: 2, registered: 3 })
        );
        assert_eq!(fs::read_to_string(config.events_path()).unwrap(), original);

        assert_eq!(service.edit_event_capacity("talk", 3).unwrap().capacity, 3);
        assert_eq!(fs::read_to_string(config.events_path()).unwrap(), "Talk|15-11-2025|Hall|3|3\n");
    }

    #[test]
    fn test_student_key_must_fit_registration_record() {
        let events = "B|02-01-2025|Hall2|5|0\n";
        let (_dir, config, service) = fixture(events, "");

        for _ in 0..2 {
            assert_matches!(service.register_student("ev|il", "B"), Err(EventDeskError::InvalidInput(_)));
        }
        assert_matches!(service.register_student("", "B"), Err(EventDeskError::InvalidInput(_)));
        assert_matches!(service.unregister_student("ev|il", "B"), Err(EventDeskError::InvalidInput(_)));

        assert_eq!(fs::read_to_string(config.events_path()).unwrap(), events);
        assert_eq!(fs::read_to_string(config.registrations_path()).unwrap(), "");
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_registration_write_keeps_event_write() {
        let dir = tempfile::tempdir().unwrap();
        let config = StorageConfig {
            registrations_file: "pending/registrations.txt".to_string(),
            ..StorageConfig::in_dir(dir.path())
        };
        fs::write(config.events_path(), "B|02-01-2025|Hall2|5|0\n").unwrap();
        // reads as a missing file, but its directory can never be created
        std::os::unix::fs::symlink(dir.path().join("missing/target"), dir.path().join("pending")).unwrap();
        let service = RegistrationService::new(&config);

        let result = service.register_student_at("s1", "B", at(6, 8, 0));
        assert_matches!(result, Err(EventDeskError::Persistence { path, .. }) if path == config.registrations_path());

        assert_eq!(fs::read_to_string(config.events_path()).unwrap(), "B|02-01-2025|Hall2|5|1\n");
        assert!(!config.registrations_path().exists());
    }
}
