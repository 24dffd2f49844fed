//! Schedule viewer: one user's week with per-day status and totals.

use crate::core::calculator::aggregate::summarize;
use crate::core::calculator::totals::{self, PeriodTotals};
use crate::db::documents::{DocumentStore, load_week};
use crate::db::paths::WeekPath;
use crate::models::day_record::DayRecord;
use crate::models::day_summary::DaySummary;
use crate::models::identity::Identity;
use crate::ui::messages::warning;
use crate::utils::date::week_days;
use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct WeekDay {
    pub date: NaiveDate,
    /// `None` when nothing was scheduled or punched that day.
    pub record: Option<DayRecord>,
    pub summary: DaySummary,
}

#[derive(Debug, Clone)]
pub struct WeekView {
    pub week_start: NaiveDate,
    pub days: Vec<WeekDay>,
    pub totals: PeriodTotals,
}

pub struct WeekLogic;

impl WeekLogic {
    /// Arrange fetched records on the seven days of the week.
    pub fn build(week_start: NaiveDate, records: Vec<DayRecord>) -> WeekView {
        let totals = totals::sum(&records);

        let days = week_days(week_start)
            .into_iter()
            .map(|date| {
                let record = records.iter().find(|r| r.date == date).cloned();
                let summary = record.as_ref().map(summarize).unwrap_or_default();
                WeekDay {
                    date,
                    record,
                    summary,
                }
            })
            .collect();

        WeekView {
            week_start,
            days,
            totals,
        }
    }

    /// Fetch and build the week containing `any_day`. A failed read is
    /// reported and shown as an empty week.
    pub fn load<S: DocumentStore + ?Sized>(
        store: &S,
        identity: &Identity,
        any_day: NaiveDate,
    ) -> WeekView {
        let week = WeekPath::containing(&identity.user_id, any_day);

        let records = match load_week(store, &week) {
            Ok(r) => r,
            Err(e) => {
                warning(format!("Error fetching schedule for {}: {}", week, e));
                Vec::new()
            }
        };

        Self::build(week.week_start, records)
    }
}
