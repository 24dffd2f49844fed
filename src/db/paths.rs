//! Document addressing: `users/{userId}/weeks/{weekStartDate}/days/{date}`.

use crate::utils::date::{format_date, week_start};
use chrono::NaiveDate;
use std::fmt;

/// The `days` collection of one user's week.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WeekPath {
    pub user_id: String,
    pub week_start: NaiveDate,
}

impl WeekPath {
    /// The week collection holding `date` (weeks start on Monday).
    pub fn containing(user_id: &str, date: NaiveDate) -> Self {
        Self {
            user_id: user_id.to_string(),
            week_start: week_start(date),
        }
    }

    pub fn week_id(&self) -> String {
        format_date(self.week_start)
    }

    pub fn day(&self, date: NaiveDate) -> DayPath {
        DayPath {
            week: self.clone(),
            date,
        }
    }
}

impl fmt::Display for WeekPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "users/{}/weeks/{}/days", self.user_id, self.week_id())
    }
}

/// A single day document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DayPath {
    pub week: WeekPath,
    pub date: NaiveDate,
}

impl DayPath {
    pub fn new(user_id: &str, date: NaiveDate) -> Self {
        WeekPath::containing(user_id, date).day(date)
    }

    pub fn user_id(&self) -> &str {
        &self.week.user_id
    }

    pub fn day_id(&self) -> String {
        format_date(self.date)
    }
}

impl fmt::Display for DayPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.week, self.day_id())
    }
}
