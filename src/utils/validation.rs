//! Input validation and normalization helpers
//!
//! Shared by the record codec, the stores and the console handlers.

/// Minimum accepted event year
pub const MIN_EVENT_YEAR: u32 = 2025;

const TRIM_CHARS: &[char] = &[' ', '\t', '\n', '\r'];

/// Trim spaces, tabs and line breaks from both ends
pub fn trim(text: &str) -> &str {
    text.trim_matches(TRIM_CHARS)
}

/// ASCII lowercase copy of `text`
pub fn to_lower(text: &str) -> String {
    text.to_ascii_lowercase()
}

/// Case-insensitive equality used for event names
pub fn same_name(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// Check if a string is non-empty and made only of ASCII digits
pub fn is_numeric(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Parse an unsigned count, rejecting signs and anything non-numeric
pub fn parse_count(text: &str) -> Option<u32> {
    if is_numeric(text) {
        text.parse().ok()
    } else {
        None
    }
}

/// Validate a `DD-MM-YYYY` date.
///
/// The bounds are literal: day 1..=31 and month 1..=12 regardless of month
/// length or leap years, and the year must be at least [`MIN_EVENT_YEAR`].
pub fn is_valid_date(date: &str) -> bool {
    let bytes = date.as_bytes();
    if bytes.len() != 10 || bytes[2] != b'-' || bytes[5] != b'-' {
        return false;
    }

    let (day, month, year) = (&date[0..2], &date[3..5], &date[6..10]);
    if !is_numeric(day) || !is_numeric(month) || !is_numeric(year) {
        return false;
    }

    let (Some(d), Some(m), Some(y)) = (parse_count(day), parse_count(month), parse_count(year)) else {
        return false;
    };

    (1..=12).contains(&m) && (1..=31).contains(&d) && y >= MIN_EVENT_YEAR
}
