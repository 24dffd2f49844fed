//! Interval arithmetic with the overnight rule: an end time-of-day earlier
//! than its start belongs to the next calendar day.

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};

/// A time-of-day pair anchored on a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Span {
    pub fn on(date: NaiveDate, start: NaiveTime, end: NaiveTime) -> Self {
        let start_dt = date.and_time(start);
        let mut end_dt = date.and_time(end);

        if end_dt < start_dt {
            end_dt = date
                .checked_add_days(Days::new(1))
                .map(|next| next.and_time(end))
                .unwrap_or(end_dt);
        }

        Self {
            start: start_dt,
            end: end_dt,
        }
    }

    pub fn minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    pub fn crosses_midnight(&self) -> bool {
        self.end.date() != self.start.date()
    }
}
