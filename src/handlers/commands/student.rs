//! Student dashboard handlers

use std::io::{BufRead, Write};
use crate::handlers::commands::{select_event, Flow};
use crate::handlers::console::Console;
use crate::handlers::display;
use crate::models::Profile;
use crate::services::{ServiceFactory, StudentRegistration};
use crate::utils::errors::Result;

/// Dispatch one student dashboard choice
pub fn handle_choice<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    services: &ServiceFactory,
    student: &Profile,
    choice: Option<i64>,
) -> Result<Flow> {
    let result = match choice {
        Some(1) => browse_events(console, services, student),
        Some(2) => my_registrations(console, services, student),
        Some(3) => search_events(console, services),
        Some(4) => {
            console.say(format!("\nGoodbye, {}!", student.full_name))?;
            return Ok(Flow::Logout);
        }
        _ => console.say("Invalid choice! Please try again."),
    };
    console.report(result)?;
    Ok(Flow::Continue)
}

fn browse_events<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    services: &ServiceFactory,
    student: &Profile,
) -> Result<()> {
    let events = services.report_service.list_events()?;
    if events.is_empty() {
        return console.say("\nNo events available!");
    }
    console.say("\n=== AVAILABLE EVENTS ===")?;
    display::event_table(console.writer(), &events)?;

    let event = match select_event(console, &events, "Enter event number to register (0 to go back): ")? {
        Some(event) => event,
        None => return Ok(()),
    };

    let registration = services
        .registration_service
        .register_student(&student.username, &event.name)?;
    console.say(format!("\nSuccessfully registered for '{}'!", registration.event_name))?;
    console.say(format!("Registration date: {}", registration.registration_date))
}

fn registration_line(index: usize, entry: &StudentRegistration) -> String {
    let registration = &entry.registration;
    match &entry.event {
        Some(event) => format!(
            "  {}. {} | {} | {} (Registered: {})",
            index, event.name, event.date, event.venue, registration.registration_date
        ),
        None => format!(
            "  {}. {} | event no longer available (Registered: {})",
            index, registration.event_name, registration.registration_date
        ),
    }
}

fn my_registrations<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    services: &ServiceFactory,
    student: &Profile,
) -> Result<()> {
    let registrations = services.report_service.student_registrations(&student.username)?;
    if registrations.is_empty() {
        return console.say("\nYou have no registrations!");
    }

    console.say("\n=== MY REGISTRATIONS ===")?;
    for (i, entry) in registrations.iter().enumerate() {
        console.say(registration_line(i + 1, entry))?;
    }
    console.say(format!("\nTotal: {}", registrations.len()))?;

    console.say("\n1. View Event Details")?;
    console.say("2. Unregister from Event")?;
    console.say("3. Back to Dashboard")?;
    let action = console.prompt_number("Enter your choice: ")?;
    if action == Some(3) {
        return Ok(());
    }
    if !matches!(action, Some(1) | Some(2)) {
        return console.say("Invalid choice!");
    }

    let entry = match console.prompt_number("Enter registration number: ")? {
        Some(n) if n >= 1 && (n as usize) <= registrations.len() => &registrations[n as usize - 1],
        _ => return console.say("Invalid selection!"),
    };

    if action == Some(1) {
        let event = services.report_service.event(&entry.registration.event_name)?;
        display::event_details(console.writer(), &event)?;
        return Ok(());
    }

    let question = format!(
        "Unregister from '{}'? (yes/no): ",
        entry.registration.event_name
    );
    if !console.confirm(&question)? {
        return console.say("Unregistration cancelled.");
    }
    let removed = services
        .registration_service
        .unregister_student(&student.username, &entry.registration.event_name)?;
    console.say(format!("\nSuccessfully unregistered from '{}'.", removed.event_name))
}

fn search_events<R: BufRead, W: Write>(console: &mut Console<R, W>, services: &ServiceFactory) -> Result<()> {
    console.say("\n--- Search Events ---")?;
    console.say("1. Search by Name")?;
    console.say("2. Filter by Date")?;

    let events = match console.prompt_number("Enter your choice: ")? {
        Some(1) => {
            let term = console.prompt("Enter search term: ")?;
            services.report_service.search_events(&term)?
        }
        Some(2) => {
            let date = console.prompt("Enter date (DD-MM-YYYY): ")?;
            services.report_service.events_on(&date)?
        }
        _ => return console.say("Invalid choice!"),
    };

    if events.is_empty() {
        return console.say("\nNo matching events found!");
    }
    console.say(format!("\nFound {} event(s):", events.len()))?;
    display::event_table(console.writer(), &events)?;
    Ok(())
}
