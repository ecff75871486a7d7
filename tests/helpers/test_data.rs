//! Record fixtures shared by the integration tests

/// A is full, B is empty
pub const SCENARIO_EVENTS: &[&str] = &[
    "A|01-01-2025|Hall1|2|2",
    "B|02-01-2025|Hall2|5|0",
];

/// The two seats of event A
pub const SCENARIO_REGISTRATIONS: &[&str] = &[
    "alice|A|01-01-2025 09:00",
    "bob|A|01-01-2025 09:30",
];

pub const CAMPUS_EVENTS: &[&str] = &[
    "Tech Fest|15-11-2025|Main Auditorium|3|1",
    "Career Fair|20-11-2025|Sports Complex|2|0",
    "Music Night|15-11-2025|Open Air Theatre|50|0",
];

pub const CAMPUS_REGISTRATIONS: &[&str] = &["mary|Tech Fest|01-11-2025 14:20"];

pub const USERS: &[&str] = &[
    "admin,admin123,Administrator,admin",
    "john,pass123,John Smith,student",
    "mary,pass456,Mary Johnson,student",
];

/// Join fixture lines into console input, one answer per line
pub fn script(lines: &[&str]) -> String {
    let mut input = lines.join("\n");
    input.push('\n');
    input
}
