//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the application.

use chrono::NaiveDateTime;

/// Timestamp layout of registration records
pub const REGISTRATION_TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M";

/// Format a registration timestamp (`DD-MM-YYYY HH:MM`)
pub fn format_registration_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.format(REGISTRATION_TIMESTAMP_FORMAT).to_string()
}

/// Percentage of `part` in `whole`, 0 when `whole` is 0
pub fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 * 100.0 / whole as f64
    }
}

/// Truncate text to a maximum number of characters with ellipsis
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_length.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
