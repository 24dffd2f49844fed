use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Days, NaiveDate, Weekday};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

pub fn format_date(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// Monday of the ISO week containing `d`. Week documents are keyed by it.
pub fn week_start(d: NaiveDate) -> NaiveDate {
    d.week(Weekday::Mon).first_day()
}

/// The seven days of the week starting at `monday`.
pub fn week_days(monday: NaiveDate) -> Vec<NaiveDate> {
    monday.iter_days().take(7).collect()
}

/// Parse `YYYY-MM` into the first day of that month.
pub fn parse_month(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
        .map_err(|_| AppError::InvalidMonth(s.to_string()))
}

pub fn current_month() -> NaiveDate {
    let t = today();
    t.with_day(1).unwrap_or(t)
}

/// Last day of the month that `first` belongs to.
pub fn month_end(first: NaiveDate) -> NaiveDate {
    let mut d = first;
    while let Some(next) = d.checked_add_days(Days::new(1)) {
        if next.month() != first.month() {
            break;
        }
        d = next;
    }
    d
}

pub fn all_days_of_month(year: i32, month: u32) -> Vec<NaiveDate> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };

    first
        .iter_days()
        .take_while(|d| d.month() == month)
        .collect()
}

/// Distinct ISO week starts covering every day of a month, in order.
pub fn week_starts_of_month(year: i32, month: u32) -> Vec<NaiveDate> {
    let mut out: Vec<NaiveDate> = Vec::new();
    for d in all_days_of_month(year, month) {
        let ws = week_start(d);
        if out.last() != Some(&ws) {
            out.push(ws);
        }
    }
    out
}

pub fn weekday_name(d: NaiveDate) -> &'static str {
    match d.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Compact label used in timesheet rows, e.g. `3-Mar`.
pub fn short_label(d: NaiveDate) -> String {
    d.format("%-d-%b").to_string()
}
