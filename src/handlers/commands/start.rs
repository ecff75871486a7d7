//! Session entry point
//!
//! Shows the welcome banner, runs the login prompt and then the dashboard
//! loop of whichever role logged in.

use std::io::{BufRead, Write};
use tracing::{debug, info, warn};
use crate::handlers::commands::{admin, student, Flow};
use crate::handlers::console::{is_end_of_input, Console};
use crate::models::Session;
use crate::services::{AuthService, ServiceFactory};
use crate::utils::errors::{EventDeskError, Result};

/// How a console session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    LoggedOut,
    LoginFailed,
}

impl SessionOutcome {
    pub fn exit_code(&self) -> u8 {
        match self {
            SessionOutcome::LoggedOut => 0,
            SessionOutcome::LoginFailed => 1,
        }
    }
}

/// Run one console session from banner to logout
pub fn run_session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    services: &ServiceFactory,
) -> Result<SessionOutcome> {
    show_welcome(console)?;

    let session = match login(console, &services.auth_service) {
        Ok(Some(session)) => session,
        Ok(None) => {
            console.say("\nMaximum login attempts exceeded. Access denied!")?;
            warn!("Login attempts exhausted");
            return Ok(SessionOutcome::LoginFailed);
        }
        Err(e) if is_end_of_input(&e) => {
            debug!("Input closed at login prompt");
            return Ok(SessionOutcome::LoggedOut);
        }
        Err(e) => return Err(e),
    };

    console.say("\n*** LOGIN SUCCESSFUL ***")?;
    console.say(format!("User Type: {}", session.role().label()))?;
    console.say(format!("Welcome, {}!", session.full_name()))?;

    loop {
        match dashboard_step(console, services, &session) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Logout) => break,
            Err(e) if is_end_of_input(&e) => {
                debug!(username = session.username(), "Input closed, logging out");
                break;
            }
            Err(e) => return Err(e),
        }
    }

    info!(username = session.username(), role = %session.role(), "Session ended");
    Ok(SessionOutcome::LoggedOut)
}

fn show_welcome<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    let rule = "=".repeat(56);
    console.say(&rule)?;
    console.say("        UNIVERSITY EVENT REGISTRATION SYSTEM")?;
    console.say(&rule)?;
    Ok(())
}

/// Prompt for credentials until they match or the attempt limit is hit.
///
/// `None` means every attempt failed.
fn login<R: BufRead, W: Write>(console: &mut Console<R, W>, auth: &AuthService) -> Result<Option<Session>> {
    let max_attempts = auth.max_attempts();

    for attempt in 1..=max_attempts {
        console.say("\n=== LOGIN ===")?;
        let username = console.prompt("Username: ")?;
        let password = console.prompt("Password: ")?;

        match auth.login(&username, &password) {
            Ok(session) => {
                console.say(format!("\n{} access granted!", session.role().label()))?;
                return Ok(Some(session));
            }
            Err(EventDeskError::Authentication(_)) => console.say("\nInvalid credentials!")?,
            Err(EventDeskError::Io(e)) => return Err(EventDeskError::Io(e)),
            Err(e) => console.say(format!("\nError: {}", e))?,
        }

        if attempt < max_attempts {
            console.say(format!("Attempts remaining: {}", max_attempts - attempt))?;
        }
    }

    Ok(None)
}

/// Show the dashboard once and dispatch the chosen entry
fn dashboard_step<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    services: &ServiceFactory,
    session: &Session,
) -> Result<Flow> {
    let title = match session {
        Session::Admin(_) => "ADMIN DASHBOARD",
        Session::Student(_) => "STUDENT DASHBOARD",
    };
    console.say(format!("\n=== {} ===", title))?;
    console.say(format!("Logged in as: {} ({})", session.full_name(), session.username()))?;
    for (i, entry) in session.menu().iter().enumerate() {
        console.say(format!("{}. {}", i + 1, entry))?;
    }

    let choice = console.prompt_number("Enter your choice: ")?;
    match session {
        Session::Admin(profile) => admin::handle_choice(console, services, profile, choice),
        Session::Student(profile) => student::handle_choice(console, services, profile, choice),
    }
}
