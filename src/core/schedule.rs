//! Schedule editor: week writes and single-day edits.

use crate::db::documents::{DocumentStore, merge_day};
use crate::errors::{AppError, AppResult};
use crate::models::day_record::DayDocument;
use crate::models::identity::Identity;
use crate::models::session::Session;
use crate::models::status::Status;
use crate::ui::messages::error;
use crate::utils::date::{week_days, week_start};
use chrono::{NaiveDate, NaiveTime};

/// What the editor wants a day to look like. `None` fields are left as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayPlan {
    pub status: Status,
    pub shift: Option<(NaiveTime, NaiveTime)>,
    pub notes: Option<String>,
    pub manager: Option<String>,
    pub sessions: Option<Vec<Session>>,
}

impl DayPlan {
    pub fn working(start: NaiveTime, end: NaiveTime) -> Self {
        Self::with_status(Status::Scheduled).shift(start, end)
    }

    pub fn with_status(status: Status) -> Self {
        Self {
            status,
            shift: None,
            notes: None,
            manager: None,
            sessions: None,
        }
    }

    pub fn shift(mut self, start: NaiveTime, end: NaiveTime) -> Self {
        self.shift = Some((start, end));
        self
    }

    /// Shift bounds are only written for scheduled days; other statuses keep
    /// whatever was stored, and the calculators ignore them.
    pub fn to_patch(&self, user_id: &str, date: NaiveDate) -> DayDocument {
        let mut patch = DayDocument::default()
            .with_status(self.status)
            .owned_by(user_id, date);

        if let (Status::Scheduled, Some((start, end))) = (self.status, self.shift) {
            patch = patch.with_shift(start, end);
        }
        if let Some(sessions) = &self.sessions {
            patch = patch.with_sessions(sessions);
        }
        patch.notes = self.notes.clone();
        patch.manager = self.manager.clone();
        patch
    }
}

pub struct ScheduleLogic;

impl ScheduleLogic {
    pub fn write_day<S: DocumentStore + ?Sized>(
        store: &mut S,
        identity: &Identity,
        date: NaiveDate,
        plan: &DayPlan,
    ) -> AppResult<()> {
        merge_day(
            store,
            &identity.user_id,
            date,
            plan.to_patch(&identity.user_id, date),
        )
    }

    /// Write seven days starting on the Monday of `any_day`'s week, one
    /// independent merge per day. A failure stops the loop: earlier days stay
    /// written, later days are not attempted.
    pub fn write_week<S: DocumentStore + ?Sized>(
        store: &mut S,
        identity: &Identity,
        any_day: NaiveDate,
        plans: &[DayPlan; 7],
    ) -> AppResult<Vec<NaiveDate>> {
        let mut written = Vec::with_capacity(7);

        for (date, plan) in week_days(week_start(any_day)).into_iter().zip(plans) {
            if let Err(e) = Self::write_day(store, identity, date, plan) {
                error(format!("Failed to save schedule for {}: {}", date, e));
                return Err(AppError::PartialWeekWrite {
                    written: written.len(),
                    failed: date,
                    reason: e.to_string(),
                });
            }
            written.push(date);
        }

        Ok(written)
    }
}
