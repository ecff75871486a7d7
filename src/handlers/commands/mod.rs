//! Menu handlers module
//!
//! The login flow and the role-specific dashboards.

pub mod start;
pub mod admin;
pub mod student;

pub use start::{run_session, SessionOutcome};

use std::io::{BufRead, Write};
use crate::handlers::console::Console;
use crate::models::Event;
use crate::utils::errors::Result;

/// What the dashboard loop does after a menu choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Logout,
}

/// Let the user pick one of `events` by its number in the table.
///
/// 0 cancels; out-of-range and non-numeric input are reported.
pub(crate) fn select_event<'a, R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    events: &'a [Event],
    label: &str,
) -> Result<Option<&'a Event>> {
    match console.prompt_number(label)? {
        Some(0) => {
            console.say("Cancelled.")?;
            Ok(None)
        }
        Some(n) if n >= 1 && (n as usize) <= events.len() => Ok(Some(&events[n as usize - 1])),
        _ => {
            console.say("Invalid selection!")?;
            Ok(None)
        }
    }
}
