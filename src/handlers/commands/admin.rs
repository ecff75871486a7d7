//! Admin dashboard handlers
//!
//! Event management, reports and student account creation.

use std::io::{BufRead, Write};
use crate::handlers::commands::{select_event, Flow};
use crate::handlers::console::Console;
use crate::handlers::display;
use crate::models::{EventChange, Profile};
use crate::services::ServiceFactory;
use crate::utils::errors::{EventDeskError, Result};
use crate::utils::logging::log_admin_action;

/// Dispatch one admin dashboard choice
pub fn handle_choice<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    services: &ServiceFactory,
    admin: &Profile,
    choice: Option<i64>,
) -> Result<Flow> {
    match choice {
        Some(1) => manage_events(console, services, admin)?,
        Some(2) => {
            let result = view_events(console, services);
            console.report(result)?
        }
        Some(3) => {
            let result = view_statistics(console, services);
            console.report(result)?
        }
        Some(4) => {
            let result = registration_reports(console, services);
            console.report(result)?
        }
        Some(5) => manage_users(console, services, admin)?,
        Some(6) => {
            console.say(format!("\nThank you for using the admin panel, {}!", admin.full_name))?;
            return Ok(Flow::Logout);
        }
        _ => console.say("Invalid choice! Please try again.")?,
    }
    Ok(Flow::Continue)
}

fn manage_events<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    services: &ServiceFactory,
    admin: &Profile,
) -> Result<()> {
    loop {
        console.say("\n--- Manage Events ---")?;
        console.say("1. Add New Event")?;
        console.say("2. Edit Event")?;
        console.say("3. Delete Event")?;
        console.say("4. Back to Dashboard")?;

        let result = match console.prompt_number("Enter your choice: ")? {
            Some(1) => add_event(console, services, admin),
            Some(2) => edit_event(console, services, admin),
            Some(3) => delete_event(console, services, admin),
            Some(4) => return Ok(()),
            _ => {
                console.say("Invalid choice! Please try again.")?;
                continue;
            }
        };
        console.report(result)?;
    }
}

fn add_event<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    services: &ServiceFactory,
    admin: &Profile,
) -> Result<()> {
    console.say("\n--- Add New Event ---")?;
    let name = console.prompt("Event name: ")?;
    let date = console.prompt("Event date (DD-MM-YYYY): ")?;
    let venue = console.prompt("Venue: ")?;
    let capacity = console
        .prompt_number("Capacity: ")?
        .ok_or_else(|| EventDeskError::InvalidInput("Capacity must be a whole number".to_string()))?;

    let event = services.registration_service.add_event(&name, &date, &venue, capacity)?;
    log_admin_action(&admin.username, "add_event", Some(&event.name));
    console.say(format!("\nEvent '{}' added successfully!", event.name))
}

fn edit_event<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    services: &ServiceFactory,
    admin: &Profile,
) -> Result<()> {
    let events = services.report_service.list_events()?;
    if events.is_empty() {
        return console.say("\nNo events available!");
    }
    display::event_table(console.writer(), &events)?;

    let event = match select_event(console, &events, "Select event to edit (0 to cancel): ")? {
        Some(event) => event,
        None => return Ok(()),
    };
    display::event_details(console.writer(), event)?;

    console.say("\nWhat would you like to change?")?;
    console.say("1. Name")?;
    console.say("2. Date")?;
    console.say("3. Venue")?;
    console.say("4. Capacity")?;
    console.say("5. Cancel")?;

    let change = match console.prompt_number("Enter your choice: ")? {
        Some(1) => EventChange::Name(console.prompt("New name: ")?),
        Some(2) => EventChange::Date(console.prompt("New date (DD-MM-YYYY): ")?),
        Some(3) => EventChange::Venue(console.prompt("New venue: ")?),
        Some(4) => {
            let capacity = console
                .prompt_number("New capacity: ")?
                .ok_or_else(|| EventDeskError::InvalidInput("Capacity must be a whole number".to_string()))?;
            EventChange::Capacity(capacity)
        }
        Some(5) => return console.say("Cancelled."),
        _ => return console.say("Invalid choice!"),
    };

    let updated = services.registration_service.edit_event(&event.name, change)?;
    log_admin_action(&admin.username, "edit_event", Some(&updated.name));
    console.say("\nEvent updated successfully!")?;
    display::event_details(console.writer(), &updated)?;
    Ok(())
}

fn delete_event<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    services: &ServiceFactory,
    admin: &Profile,
) -> Result<()> {
    let events = services.report_service.list_events()?;
    if events.is_empty() {
        return console.say("\nNo events available!");
    }
    display::event_table(console.writer(), &events)?;

    let event = match select_event(console, &events, "Select event to delete (0 to cancel): ")? {
        Some(event) => event,
        None => return Ok(()),
    };

    let question = format!(
        "Delete '{}' and all its registrations? (yes/no): ",
        event.name
    );
    if !console.confirm(&question)? {
        return console.say("Deletion cancelled.");
    }

    let deleted = services.registration_service.delete_event(&event.name)?;
    log_admin_action(&admin.username, "delete_event", Some(&deleted.event.name));
    console.say(format!(
        "\nEvent '{}' deleted. {} registration(s) removed.",
        deleted.event.name, deleted.registrations_removed
    ))
}

fn view_events<R: BufRead, W: Write>(console: &mut Console<R, W>, services: &ServiceFactory) -> Result<()> {
    let events = services.report_service.list_events()?;
    if events.is_empty() {
        return console.say("\nNo events available!");
    }
    console.say("\n=== ALL EVENTS ===")?;
    display::event_table(console.writer(), &events)?;
    Ok(())
}

fn view_statistics<R: BufRead, W: Write>(console: &mut Console<R, W>, services: &ServiceFactory) -> Result<()> {
    let stats = services.report_service.statistics()?;
    if stats.total_events == 0 {
        return console.say("\nNo events available!");
    }
    console.say("\n=== EVENT STATISTICS ===")?;
    display::statistics(console.writer(), &stats)?;
    Ok(())
}

/// 0 prints the per-event summary, an event number lists its participants
fn registration_reports<R: BufRead, W: Write>(console: &mut Console<R, W>, services: &ServiceFactory) -> Result<()> {
    let events = services.report_service.list_events()?;
    if events.is_empty() {
        return console.say("\nNo events available!");
    }
    console.say("\n=== REGISTRATION REPORTS ===")?;
    display::event_table(console.writer(), &events)?;

    match console.prompt_number("Select event for participants (0 for summary): ")? {
        Some(0) => {
            let summary = services.report_service.registration_summary()?;
            display::registration_summary(console.writer(), &summary)?;
        }
        Some(n) if n >= 1 && (n as usize) <= events.len() => {
            let event = &events[n as usize - 1];
            let participants = services.report_service.participants(&event.name)?;
            display::participants(console.writer(), &event.name, &participants)?;
        }
        _ => console.say("Invalid selection!")?,
    }
    Ok(())
}

fn manage_users<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    services: &ServiceFactory,
    admin: &Profile,
) -> Result<()> {
    loop {
        console.say("\n--- Manage Users ---")?;
        console.say("1. Add Student")?;
        console.say("2. View All Users")?;
        console.say("3. Back to Dashboard")?;

        let result = match console.prompt_number("Enter your choice: ")? {
            Some(1) => add_student(console, services, admin),
            Some(2) => view_users(console, services),
            Some(3) => return Ok(()),
            _ => {
                console.say("Invalid choice! Please try again.")?;
                continue;
            }
        };
        console.report(result)?;
    }
}

fn add_student<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    services: &ServiceFactory,
    admin: &Profile,
) -> Result<()> {
    console.say("\n--- Add Student ---")?;
    let username = console.prompt("Username: ")?;
    let password = console.prompt("Password: ")?;
    let full_name = console.prompt("Full name: ")?;

    let user = services
        .user_service
        .add_student(&admin.username, &username, &password, &full_name)?;
    console.say(format!("\nStudent '{}' added successfully!", user.username))
}

fn view_users<R: BufRead, W: Write>(console: &mut Console<R, W>, services: &ServiceFactory) -> Result<()> {
    let users = services.user_service.list_users()?;
    console.say("\n=== ALL USERS ===")?;
    display::users(console.writer(), &users)?;
    Ok(())
}
