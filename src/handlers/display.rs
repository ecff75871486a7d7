//! Table and report rendering

use std::io::{self, Write};
use crate::models::{Event, Registration, User};
use crate::services::{EventStatistics, RegistrationCount};
use crate::utils::helpers::truncate_text;

const RULE_WIDTH: usize = 110;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

pub fn event_row(index: usize, event: &Event) -> String {
    format!(
        "  {:>2}. {:<25} | {:<12} | {:<20} | {:<4} | {:<4} | {}",
        index,
        truncate_text(&event.name, 25),
        event.date,
        truncate_text(&event.venue, 20),
        event.capacity,
        event.registered_count,
        event.available_seats()
    )
}

/// Numbered event table, numbering from 1
pub fn event_table<W: Write>(w: &mut W, events: &[Event]) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "{}", rule())?;
    writeln!(
        w,
        "  {:<2}  {:<25} | {:<12} | {:<20} | {:<4} | {:<4} | AVL",
        "#", "EVENT NAME", "DATE", "VENUE", "CAP", "REG"
    )?;
    writeln!(w, "{}", rule())?;
    for (i, event) in events.iter().enumerate() {
        writeln!(w, "{}", event_row(i + 1, event))?;
    }
    writeln!(w, "{}", rule())
}

pub fn event_details<W: Write>(w: &mut W, event: &Event) -> io::Result<()> {
    writeln!(w, "\n--- Event Details ---")?;
    writeln!(w, "Name: {}", event.name)?;
    writeln!(w, "Date: {}", event.date)?;
    writeln!(w, "Venue: {}", event.venue)?;
    writeln!(w, "Total Capacity: {}", event.capacity)?;
    writeln!(w, "Registered Students: {}", event.registered_count)?;
    writeln!(w, "Available Seats: {}", event.available_seats())?;
    writeln!(w, "Occupancy: {:.1}%", event.occupancy_percent())
}

pub fn statistics<W: Write>(w: &mut W, stats: &EventStatistics) -> io::Result<()> {
    writeln!(w, "Total Events: {}", stats.total_events)?;
    writeln!(w, "Total Capacity: {}", stats.total_capacity)?;
    writeln!(w, "Total Registrations: {}", stats.total_registered)?;
    writeln!(w, "Overall Occupancy: {:.1}%", stats.overall_occupancy)?;
    writeln!(w, "\nEvent-wise Breakdown:")?;
    writeln!(w, "{}", "-".repeat(43))?;
    for event in &stats.per_event {
        writeln!(
            w,
            "{}: {}/{} ({:.1}%)",
            event.name, event.registered, event.capacity, event.occupancy
        )?;
    }
    Ok(())
}

pub fn registration_summary<W: Write>(w: &mut W, summary: &[RegistrationCount]) -> io::Result<()> {
    writeln!(w, "\n=== REGISTRATION SUMMARY ===")?;
    for entry in summary {
        writeln!(w, "{}: {} registrations", entry.event_name, entry.registrations)?;
    }
    Ok(())
}

pub fn participants<W: Write>(w: &mut W, event_name: &str, registrations: &[Registration]) -> io::Result<()> {
    writeln!(w, "\n=== PARTICIPANTS FOR: {} ===", event_name)?;
    if registrations.is_empty() {
        return writeln!(w, "No registrations for this event!");
    }
    for (i, reg) in registrations.iter().enumerate() {
        writeln!(
            w,
            "  {}. {} (Registered: {})",
            i + 1,
            reg.student_username,
            reg.registration_date
        )?;
    }
    writeln!(w, "\nTotal Participants: {}", registrations.len())
}

pub fn users<W: Write>(w: &mut W, users: &[User]) -> io::Result<()> {
    writeln!(w, "{}", "=".repeat(36))?;
    for (i, user) in users.iter().enumerate() {
        writeln!(
            w,
            "{}. Username: {} | Name: {} | Type: {}",
            i + 1,
            user.username,
            user.full_name,
            user.role
        )?;
    }
    writeln!(w, "{}", "=".repeat(36))?;
    writeln!(w, "Total Users: {}", users.len())
}
