//! Monthly timesheet: records across week boundaries, split into halves.

use crate::core::calculator::aggregate::summarize;
use crate::core::calculator::totals::{self, HalfMonth, Period, PeriodTotals};
use crate::db::documents::{DocumentStore, load_week};
use crate::db::paths::WeekPath;
use crate::errors::AppResult;
use crate::models::day_record::DayRecord;
use crate::models::identity::Identity;
use crate::ui::messages::warning;
use crate::utils::date::{format_date, month_end, short_label, week_starts_of_month, weekday_name};
use crate::utils::time::{format_minutes, format_optional_time, format_time};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TimesheetRow {
    pub user_id: String,
    pub date: String,
    pub label: String,
    pub weekday: String,
    pub schedule_start: String,
    pub schedule_end: String,
    pub punch_in: String,
    pub punch_out: String,
    pub total: String,
    pub scheduled_minutes: i64,
    pub worked_minutes: i64,
    pub notes: String,
    pub manager: String,
}

impl TimesheetRow {
    pub fn from_record(record: &DayRecord) -> Self {
        let summary = summarize(record);

        // Shift columns mirror what counts as scheduled time.
        let (schedule_start, schedule_end) = match record.status.and_then(|s| s.schedule_sentinel()) {
            Some(sentinel) => (sentinel.to_string(), sentinel.to_string()),
            None => record
                .shift()
                .map(|(start, end)| (format_time(start), format_time(end)))
                .unwrap_or_default(),
        };

        Self {
            user_id: record.user_id.clone().unwrap_or_default(),
            date: format_date(record.date),
            label: short_label(record.date),
            weekday: weekday_name(record.date).to_string(),
            schedule_start,
            schedule_end,
            punch_in: format_optional_time(summary.first_in),
            punch_out: format_optional_time(summary.last_out),
            total: format_minutes(summary.worked_minutes),
            scheduled_minutes: summary.scheduled_minutes,
            worked_minutes: summary.worked_minutes,
            notes: record.notes.clone().unwrap_or_default(),
            manager: record.manager.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TimesheetHalf {
    pub half: HalfMonth,
    pub rows: Vec<TimesheetRow>,
    pub totals: PeriodTotals,
}

#[derive(Debug, Clone)]
pub struct Timesheet {
    pub month: NaiveDate,
    pub all_users: bool,
    pub halves: Vec<TimesheetHalf>,
}

impl Timesheet {
    pub fn rows(&self) -> impl Iterator<Item = &TimesheetRow> {
        self.halves.iter().flat_map(|h| h.rows.iter())
    }

    pub fn totals(&self) -> PeriodTotals {
        let mut t = PeriodTotals::default();
        for h in &self.halves {
            t.scheduled_minutes += h.totals.scheduled_minutes;
            t.worked_minutes += h.totals.worked_minutes;
        }
        t
    }
}

pub struct TimesheetLogic;

impl TimesheetLogic {
    /// Group records of one month into the two halves. Both halves are always
    /// present, possibly empty.
    pub fn build(month: NaiveDate, all_users: bool, mut records: Vec<DayRecord>) -> Timesheet {
        records.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.user_id.cmp(&b.user_id)));

        let by_half = totals::sum_by(&records, Period::half_month);

        let halves = [HalfMonth::First, HalfMonth::Second]
            .into_iter()
            .map(|half| TimesheetHalf {
                half,
                rows: records
                    .iter()
                    .filter(|r| HalfMonth::of(r.date) == half)
                    .map(TimesheetRow::from_record)
                    .collect(),
                totals: by_half.get(&Period::Half(half)).copied().unwrap_or_default(),
            })
            .collect();

        Timesheet {
            month,
            all_users,
            halves,
        }
    }

    /// Records dated inside `month` (first day of the month). Admins get every
    /// user, everyone else only themselves.
    pub fn fetch<S: DocumentStore + ?Sized>(
        store: &S,
        identity: &Identity,
        month: NaiveDate,
    ) -> AppResult<Vec<DayRecord>> {
        let first = month.with_day(1).unwrap_or(month);
        let last = month_end(first);
        let in_month = |r: &DayRecord| r.date >= first && r.date <= last;

        let mut out = Vec::new();

        if identity.is_admin {
            for user in store.list_users()? {
                for ws in store.list_weeks(&user)? {
                    let week = WeekPath {
                        user_id: user.clone(),
                        week_start: ws,
                    };
                    out.extend(owned(load_week(store, &week)?, &user).filter(in_month));
                }
            }
        } else {
            for ws in week_starts_of_month(first.year(), first.month()) {
                let week = WeekPath {
                    user_id: identity.user_id.clone(),
                    week_start: ws,
                };
                out.extend(owned(load_week(store, &week)?, &identity.user_id).filter(in_month));
            }
        }

        Ok(out)
    }

    /// Fetch and build. A failed read is reported and yields an empty sheet.
    pub fn load<S: DocumentStore + ?Sized>(
        store: &S,
        identity: &Identity,
        month: NaiveDate,
    ) -> Timesheet {
        let records = match Self::fetch(store, identity, month) {
            Ok(r) => r,
            Err(e) => {
                warning(format!("Error fetching timesheet data: {}", e));
                Vec::new()
            }
        };

        Self::build(month, identity.is_admin, records)
    }
}

/// The owning user is the one in the document path.
fn owned(records: Vec<DayRecord>, user_id: &str) -> impl Iterator<Item = DayRecord> + '_ {
    records.into_iter().map(move |mut r| {
        r.user_id = Some(user_id.to_string());
        r
    })
}
