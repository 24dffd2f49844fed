//! Formatting utilities used for CLI and export outputs.

use crate::models::status::Status;
use crate::utils::colors::{GREEN, RED, YELLOW};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// Textual description and ANSI colour for a day status.
pub fn describe_status(status: Status) -> (&'static str, &'static str) {
    match status {
        Status::Scheduled => ("Scheduled", GREEN),
        Status::OnCall => ("On Call", YELLOW),
        Status::NotAvailable => ("Not Available", RED),
    }
}

/// Human readable span, e.g. `8h 05m`.
pub fn mins2readable(mins: i64) -> String {
    let m = mins.max(0);
    format!("{}h {:02}m", m / 60, m % 60)
}
