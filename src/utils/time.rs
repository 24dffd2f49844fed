//! Time utilities: parsing HH:MM, shift ranges, formatting minutes, etc.

use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveTime, Timelike};

/// Marker rendered in place of a punch time when the record has none.
pub const NOT_AVAILABLE: &str = "N/A";

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// Lenient variant used when decoding stored documents:
/// blank strings are "absent", not an error.
pub fn parse_stored_time(t: Option<&str>) -> Option<NaiveTime> {
    t.filter(|s| !s.trim().is_empty()).and_then(parse_time)
}

/// Parse a shift written as `HH:MM-HH:MM` (e.g. `15:00-23:00`).
pub fn parse_shift(s: &str) -> AppResult<(NaiveTime, NaiveTime)> {
    let (start, end) = s
        .split_once('-')
        .ok_or_else(|| AppError::InvalidShift(s.to_string()))?;

    match (parse_time(start), parse_time(end)) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(AppError::InvalidShift(s.to_string())),
    }
}

pub fn format_time(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

pub fn format_optional_time(t: Option<NaiveTime>) -> String {
    t.map(format_time)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Minutes rendered as `H:MM`: hours unbounded, minutes zero-padded.
pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{}:{:02}", sign, m / 60, m % 60)
}

/// Minutes rendered as decimal hours with two digits (e.g. `12.50`).
pub fn format_hours_decimal(mins: i64) -> String {
    format!("{:.2}", mins as f64 / 60.0)
}

/// Current local time truncated to the minute.
pub fn now_minute() -> NaiveTime {
    let now = Local::now().time();
    NaiveTime::from_hms_opt(now.hour(), now.minute(), 0).unwrap_or(now)
}
