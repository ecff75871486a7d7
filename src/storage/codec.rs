//! Record codec
//!
//! Line formats of the three record files:
//!
//! - events: `name|date|venue|capacity|registeredCount`
//! - registrations: `student|event|registrationDate`
//! - users: `username,password,fullName,role`
//!
//! Every field is trimmed on decode. Callers skip blank lines before
//! decoding, see [`decode_lines`].

use tracing::warn;
use crate::models::{Event, Registration, Role, User};
use crate::utils::errors::{EventDeskError, Result};
use crate::utils::validation::{parse_count, trim};

pub const RECORD_DELIMITER: char = '|';
pub const USER_DELIMITER: char = ',';

fn fields(line: &str, delimiter: char) -> Vec<&str> {
    line.split(delimiter).map(trim).collect()
}

/// Decode one event record.
///
/// The registered count is optional and defaults to 0.
pub fn decode_event(line: &str) -> Result<Event> {
    let parts = fields(line, RECORD_DELIMITER);
    if parts.len() < 4 {
        return Err(EventDeskError::parse(line, format!("expected at least 4 fields, found {}", parts.len())));
    }

    let capacity = parse_count(parts[3])
        .ok_or_else(|| EventDeskError::parse(line, format!("capacity '{}' is not a number", parts[3])))?;
    let registered_count = match parts.get(4) {
        Some(raw) => parse_count(raw)
            .ok_or_else(|| EventDeskError::parse(line, format!("registered count '{}' is not a number", raw)))?,
        None => 0,
    };

    if parts[0].is_empty() {
        return Err(EventDeskError::parse(line, "event name is empty"));
    }
    if capacity == 0 {
        return Err(EventDeskError::parse(line, "capacity must be greater than 0"));
    }
    if registered_count > capacity {
        return Err(EventDeskError::parse(
            line,
            format!("registered count {} exceeds capacity {}", registered_count, capacity),
        ));
    }

    Ok(Event {
        name: parts[0].to_string(),
        date: parts[1].to_string(),
        venue: parts[2].to_string(),
        capacity,
        registered_count,
    })
}

pub fn encode_event(event: &Event) -> String {
    format!(
        "{}|{}|{}|{}|{}",
        event.name, event.date, event.venue, event.capacity, event.registered_count
    )
}

/// Decode one registration record, which must have exactly 3 fields
pub fn decode_registration(line: &str) -> Result<Registration> {
    let parts = fields(line, RECORD_DELIMITER);
    if parts.len() != 3 {
        return Err(EventDeskError::parse(line, format!("expected 3 fields, found {}", parts.len())));
    }

    Ok(Registration::new(parts[0], parts[1], parts[2]))
}

pub fn encode_registration(registration: &Registration) -> String {
    format!(
        "{}|{}|{}",
        registration.student_username, registration.event_name, registration.registration_date
    )
}

/// Decode one user record; fields past the fourth are ignored
pub fn decode_user(line: &str) -> Result<User> {
    let parts = fields(line, USER_DELIMITER);
    if parts.len() < 4 {
        return Err(EventDeskError::parse(line, format!("expected at least 4 fields, found {}", parts.len())));
    }

    if parts[0].is_empty() {
        return Err(EventDeskError::parse(line, "username is empty"));
    }
    // usernames are written into registration records
    if parts[0].contains(RECORD_DELIMITER) {
        return Err(EventDeskError::parse(
            line,
            format!("username cannot contain '{}'", RECORD_DELIMITER),
        ));
    }

    let role: Role = parts[3].parse().map_err(|reason: String| EventDeskError::parse(line, reason))?;

    Ok(User {
        username: parts[0].to_string(),
        password: parts[1].to_string(),
        full_name: parts[2].to_string(),
        role,
    })
}

pub fn encode_user(user: &User) -> String {
    format!("{},{},{},{}", user.username, user.password, user.full_name, user.role)
}

/// Decode every non-blank line, skipping and logging the malformed ones
pub fn decode_lines<T>(lines: &[String], decode: impl Fn(&str) -> Result<T>) -> Vec<T> {
    lines
        .iter()
        .filter(|line| !trim(line).is_empty())
        .filter_map(|line| match decode(line) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(error = %e, "Skipping malformed record");
                None
            }
        })
        .collect()
}
