//! Scripted console sessions
//!
//! Each test feeds a full session through the menus and checks both what
//! was printed and what reached the record files.

mod helpers;

use helpers::*;
use EventDesk::SessionOutcome;

fn campus() -> TestContext {
    let ctx = TestContext::with_records(CAMPUS_EVENTS, CAMPUS_REGISTRATIONS).unwrap();
    ctx.write_users(USERS);
    ctx
}

#[test]
fn test_login_attempts_exhausted() {
    let ctx = campus();
    let input = script(&["admin", "wrong", "john", "nope", "mary", "pass123"]);

    let (outcome, output) = ctx.run_script(&input);
    assert_eq!(outcome, SessionOutcome::LoginFailed);
    assert_eq!(outcome.exit_code(), 1);
    assert_eq!(output.matches("Invalid credentials!").count(), 3);
    assert!(output.contains("Attempts remaining: 2"));
    assert!(output.contains("Attempts remaining: 1"));
    assert!(output.contains("Maximum login attempts exceeded. Access denied!"));
}

#[test]
fn test_end_of_input_logs_out() {
    let ctx = campus();

    let (outcome, output) = ctx.run_script(&script(&["john", "pass123"]));
    assert_eq!(outcome, SessionOutcome::LoggedOut);
    assert_eq!(outcome.exit_code(), 0);
    assert!(output.contains("Student access granted!"));
    assert!(output.contains("=== STUDENT DASHBOARD ==="));

    let (outcome, _) = ctx.run_script("");
    assert_eq!(outcome, SessionOutcome::LoggedOut);
}

#[test]
fn test_admin_adds_event() {
    let ctx = campus();
    let input = script(&[
        "admin", "admin123",
        "1", "1", "Expo", "01-12-2025", "Gym", "2",
        "1", "abc", "02-12-2025", "Gym", "lots",
        "4", "6",
    ]);

    let (outcome, output) = ctx.run_script(&input);
    assert_eq!(outcome, SessionOutcome::LoggedOut);
    assert!(output.contains("Event 'Expo' added successfully!"));
    assert!(output.contains("Error: Invalid input: Capacity must be a whole number"));
    assert!(output.contains("Thank you for using the admin panel, Administrator!"));
    assert_eq!(ctx.event_lines().last().map(String::as_str), Some("Expo|01-12-2025|Gym|2|0"));
    assert_eq!(ctx.event_lines().len(), 4);
}

#[test]
fn test_admin_deletes_event_with_registrations() {
    let ctx = campus();
    let input = script(&["admin", "admin123", "1", "3", "1", "yes", "4", "6"]);

    let (_, output) = ctx.run_script(&input);
    assert!(output.contains("Event 'Tech Fest' deleted. 1 registration(s) removed."));
    assert_eq!(ctx.event_lines().len(), 2);
    assert!(ctx.registration_lines().is_empty());
}

#[test]
fn test_admin_edit_rejects_zero_capacity() {
    let ctx = campus();
    let input = script(&["admin", "admin123", "1", "2", "1", "4", "0", "4", "6"]);

    let (_, output) = ctx.run_script(&input);
    assert!(output.contains("Error: Capacity must be greater than 0 (got 0)"));
    assert_eq!(ctx.event_lines(), CAMPUS_EVENTS);
}

#[test]
fn test_admin_reports_and_users() {
    let ctx = campus();
    let input = script(&[
        "admin", "admin123",
        "3",
        "4", "1",
        "5", "1", "bob", "bob789", "Bob Lee", "2", "3",
        "6",
    ]);

    let (_, output) = ctx.run_script(&input);
    assert!(output.contains("Total Events: 3"));
    assert!(output.contains("=== PARTICIPANTS FOR: Tech Fest ==="));
    assert!(output.contains("1. mary (Registered: 01-11-2025 14:20)"));
    assert!(output.contains("Student 'bob' added successfully!"));
    assert!(output.contains("Total Users: 4"));
    assert_eq!(ctx.user_lines().last().map(String::as_str), Some("bob,bob789,Bob Lee,student"));
}

#[test]
fn test_student_registers_from_browse() {
    let ctx = campus();
    let input = script(&["john", "pass123", "1", "2", "1", "2", "4"]);

    let (_, output) = ctx.run_script(&input);
    assert!(output.contains("Successfully registered for 'Career Fair'!"));
    assert!(output.contains("Error: john is already registered for 'Career Fair'"));
    assert_eq!(ctx.event_lines()[1], "Career Fair|20-11-2025|Sports Complex|2|1");
    assert_eq!(ctx.registration_lines().len(), 2);
    assert!(output.contains("Goodbye, John Smith!"));
}

#[test]
fn test_student_unregisters() {
    let ctx = campus();
    let input = script(&["mary", "pass456", "2", "2", "1", "yes", "2", "4"]);

    let (_, output) = ctx.run_script(&input);
    assert!(output.contains("Successfully unregistered from 'Tech Fest'."));
    assert!(output.contains("You have no registrations!"));
    assert_eq!(ctx.event_lines()[0], "Tech Fest|15-11-2025|Main Auditorium|3|0");
    assert!(ctx.registration_lines().is_empty());
}

#[test]
fn test_student_search() {
    let ctx = campus();
    let input = script(&[
        "john", "pass123",
        "3", "2", "15-11-2025",
        "3", "2", "15-13-2025",
        "3", "1", "night",
        "9",
        "4",
    ]);

    let (_, output) = ctx.run_script(&input);
    assert!(output.contains("Found 2 event(s):"));
    assert!(output.contains("Error: Invalid date '15-13-2025'"));
    assert!(output.contains("Found 1 event(s):"));
    assert!(output.contains("Invalid choice! Please try again."));
}
