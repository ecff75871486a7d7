//! Event store
//!
//! In-memory event collection in file order. Names are unique ignoring
//! ASCII case.

use tracing::debug;
use crate::models::{Event, EventChange};
use crate::storage::codec::{decode_event, decode_lines, encode_event, RECORD_DELIMITER};
use crate::storage::files::LineFile;
use crate::utils::errors::{EventDeskError, Result};
use crate::utils::validation::{is_valid_date, same_name, to_lower, trim};

/// Fails when `value` would break the record format
pub fn reject_delimiter(label: &str, value: &str) -> Result<()> {
    if value.contains(RECORD_DELIMITER) {
        return Err(EventDeskError::InvalidInput(format!(
            "{} cannot contain '{}'",
            label, RECORD_DELIMITER
        )));
    }
    Ok(())
}

#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    /// Load events from `file`, skipping malformed lines
    pub fn load(file: &LineFile) -> Result<Self> {
        let lines = file.read_lines()?;
        Ok(Self::from_lines(&lines))
    }

    pub fn from_lines(lines: &[String]) -> Self {
        Self::from_events(decode_lines(lines, decode_event))
    }

    /// Build a store from already decoded events.
    ///
    /// A later event whose name repeats an earlier one is dropped.
    pub fn from_events(events: Vec<Event>) -> Self {
        let mut store = Self::default();
        for event in events {
            if let Err(e) = store.add(event) {
                debug!(error = %e, "Dropping duplicate event record");
            }
        }
        store
    }

    pub fn save(&self, file: &LineFile) -> Result<usize> {
        file.write_lines(self.to_lines())
    }

    pub fn to_lines(&self) -> Vec<String> {
        self.events.iter().map(encode_event).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.events.iter().position(|e| same_name(&e.name, name))
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Event> {
        self.position(name).map(|i| &self.events[i])
    }

    fn find_by_name_mut(&mut self, name: &str) -> Result<&mut Event> {
        match self.position(name) {
            Some(i) => Ok(&mut self.events[i]),
            None => Err(EventDeskError::EventNotFound(name.to_string())),
        }
    }

    pub fn add(&mut self, event: Event) -> Result<()> {
        if self.find_by_name(&event.name).is_some() {
            return Err(EventDeskError::DuplicateName(event.name));
        }
        self.events.push(event);
        Ok(())
    }

    /// Apply one field change to the event called `name`
    pub fn update(&mut self, name: &str, change: EventChange) -> Result<&Event> {
        let index = self
            .position(name)
            .ok_or_else(|| EventDeskError::EventNotFound(name.to_string()))?;

        match change {
            EventChange::Name(new_name) => {
                let new_name = trim(&new_name);
                if new_name.is_empty() {
                    return Err(EventDeskError::InvalidInput("Event name cannot be empty".to_string()));
                }
                reject_delimiter("Event name", new_name)?;
                let taken = self
                    .events
                    .iter()
                    .enumerate()
                    .any(|(i, e)| i != index && same_name(&e.name, new_name));
                if taken {
                    return Err(EventDeskError::DuplicateName(new_name.to_string()));
                }
                self.events[index].name = new_name.to_string();
            }
            EventChange::Date(date) => {
                let date = trim(&date);
                if !is_valid_date(date) {
                    return Err(EventDeskError::InvalidDate(date.to_string()));
                }
                self.events[index].date = date.to_string();
            }
            EventChange::Venue(venue) => {
                let venue = trim(&venue);
                if venue.is_empty() {
                    return Err(EventDeskError::InvalidInput("Venue cannot be empty".to_string()));
                }
                reject_delimiter("Venue", venue)?;
                self.events[index].venue = venue.to_string();
            }
            EventChange::Capacity(capacity) => {
                let current = self.events[index].name.clone();
                self.set_capacity(&current, capacity)?;
            }
        }

        Ok(&self.events[index])
    }

    /// Remove and return the event; registrations are the caller's concern
    pub fn remove(&mut self, name: &str) -> Result<Event> {
        let index = self
            .position(name)
            .ok_or_else(|| EventDeskError::EventNotFound(name.to_string()))?;
        Ok(self.events.remove(index))
    }

    pub fn set_capacity(&mut self, name: &str, new_capacity: i64) -> Result<&Event> {
        let event = self.find_by_name_mut(name)?;

        let capacity = u32::try_from(new_capacity)
            .ok()
            .filter(|c| *c > 0)
            .ok_or(EventDeskError::InvalidCapacity(new_capacity))?;
        if capacity < event.registered_count {
            return Err(EventDeskError::CapacityBelowRegistered {
                requested: capacity,
                registered: event.registered_count,
            });
        }

        event.capacity = capacity;
        Ok(&*event)
    }

    /// Take one seat. Fails with `EventFull` when none is left.
    pub fn reserve_seat(&mut self, name: &str) -> Result<&Event> {
        let event = self.find_by_name_mut(name)?;
        if !event.has_available_seats() {
            return Err(EventDeskError::EventFull(event.name.clone()));
        }
        event.registered_count += 1;
        Ok(&*event)
    }

    /// Give one seat back, never going below zero. Returns false when no
    /// event has that name.
    pub fn release_seat(&mut self, name: &str) -> bool {
        match self.find_by_name_mut(name) {
            Ok(event) => {
                event.registered_count = event.registered_count.saturating_sub(1);
                true
            }
            Err(_) => false,
        }
    }

    /// Events whose name contains `term`, ignoring case
    pub fn search(&self, term: &str) -> Vec<&Event> {
        let term = to_lower(term);
        self.events
            .iter()
            .filter(|e| to_lower(&e.name).contains(&term))
            .collect()
    }

    pub fn on_date(&self, date: &str) -> Vec<&Event> {
        self.events.iter().filter(|e| e.date == date).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn store() -> EventStore {
        EventStore::from_events(vec![
            Event::new("Tech Fest", "15-11-2025", "Main Hall", 3),
            Event::new("Hackathon", "20-11-2025", "Lab 2", 2),
        ])
    }

    #[test]
    fn test_find_by_name_ignores_case() {
        let store = store();
        assert_eq!(store.find_by_name("tech FEST").map(|e| e.venue.as_str()), Some("Main Hall"));
        assert!(store.find_by_name("Tech").is_none());
    }

    #[test]
    fn test_add_rejects_duplicate_name() {
        let mut store = store();
        let result = store.add(Event::new("HACKATHON", "01-12-2025", "Gym", 10));
        assert_matches!(result, Err(EventDeskError::DuplicateName(name)) if name == "HACKATHON");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_from_lines_keeps_first_duplicate() {
        let lines = vec![
            "A|01-01-2025|Hall1|2|1".to_string(),
            "a|01-01-2025|Hall9|9|0".to_string(),
        ];
        let store = EventStore::from_lines(&lines);
        assert_eq!(store.len(), 1);
        assert_eq!(store.find_by_name("A").map(|e| e.capacity), Some(2));
    }

    #[test]
    fn test_rename() {
        let mut store = store();
        assert_matches!(
            store.update("Tech Fest", EventChange::Name("hackathon".into())),
            Err(EventDeskError::DuplicateName(_))
        );
        // a case variant of its own name is not a collision
        store.update("Tech Fest", EventChange::Name("TECH FEST".into())).unwrap();
        assert_eq!(store.find_by_name("tech fest").map(|e| e.name.as_str()), Some("TECH FEST"));

        assert_matches!(
            store.update("Tech Fest", EventChange::Name("  ".into())),
            Err(EventDeskError::InvalidInput(_))
        );
        assert_matches!(
            store.update("Tech Fest", EventChange::Name("Tech|Fest".into())),
            Err(EventDeskError::InvalidInput(_))
        );
    }

    #[test]
    fn test_update_date_and_venue() {
        let mut store = store();
        assert_matches!(
            store.update("Hackathon", EventChange::Date("31-02-2024".into())),
            Err(EventDeskError::InvalidDate(_))
        );
        let event = store.update("Hackathon", EventChange::Date("31-04-2026".into())).unwrap();
        assert_eq!(event.date, "31-04-2026");
        let event = store.update("Hackathon", EventChange::Venue(" Lab 3 ".into())).unwrap();
        assert_eq!(event.venue, "Lab 3");
        assert_matches!(
            store.update("Missing", EventChange::Venue("Gym".into())),
            Err(EventDeskError::EventNotFound(_))
        );
    }

    #[test]
    fn test_set_capacity_guards() {
        let mut store = store();
        store.reserve_seat("Tech Fest").unwrap();
        store.reserve_seat("Tech Fest").unwrap();

        assert_matches!(store.set_capacity("Tech Fest", 0), Err(EventDeskError::InvalidCapacity(0)));
        assert_matches!(store.set_capacity("Tech Fest", -4), Err(EventDeskError::InvalidCapacity(-4)));
        assert_matches!(
            store.set_capacity("Tech Fest", 1),
            Err(EventDeskError::CapacityBelowRegistered { requested: 1, registered: 2 })
        );
        assert_eq!(store.set_capacity("Tech Fest", 2).unwrap().available_seats(), 0);
        assert_matches!(store.set_capacity("Nope", 5), Err(EventDeskError::EventNotFound(_)));
    }

    #[test]
    fn test_seats() {
        let mut store = store();
        store.reserve_seat("hackathon").unwrap();
        store.reserve_seat("hackathon").unwrap();
        assert_matches!(store.reserve_seat("hackathon"), Err(EventDeskError::EventFull(name)) if name == "Hackathon");

        assert!(store.release_seat("Hackathon"));
        assert!(store.release_seat("Hackathon"));
        assert!(store.release_seat("Hackathon"));
        assert_eq!(store.find_by_name("Hackathon").map(|e| e.registered_count), Some(0));
        assert!(!store.release_seat("Gone"));
    }

    #[test]
    fn test_remove() {
        let mut store = store();
        assert_eq!(store.remove("TECH fest").unwrap().name, "Tech Fest");
        assert_matches!(store.remove("Tech Fest"), Err(EventDeskError::EventNotFound(_)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_search_and_date_filter() {
        let store = store();
        let found: Vec<_> = store.search("FEST").iter().map(|e| e.name.clone()).collect();
        assert_eq!(found, ["Tech Fest"]);
        assert_eq!(store.search("a").len(), 1);
        assert_eq!(store.on_date("20-11-2025").len(), 1);
        assert!(store.on_date("21-11-2025").is_empty());
    }
}
