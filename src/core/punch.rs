//! Punch clock: toggles today's record between "on the clock" and "off".

use crate::core::calculator::duration::Span;
use crate::db::documents::{DocumentStore, load_day, merge_day};
use crate::errors::{AppError, AppResult};
use crate::models::day_record::{DayDocument, DayRecord};
use crate::models::identity::Identity;
use crate::models::punch_kind::PunchKind;
use crate::models::session::Session;
use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};

#[derive(Debug, Clone)]
pub struct PunchRequest {
    pub date: NaiveDate,
    pub time: NaiveTime,
    /// `None` lets the clock pick from the current state.
    pub kind: Option<PunchKind>,
    pub notes: Option<String>,
    pub manager: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PunchFeedback {
    CameEarly,
    EarlyPunchOut,
}

impl PunchFeedback {
    pub fn message(&self) -> &'static str {
        match self {
            PunchFeedback::CameEarly => "Well done! You came early.",
            PunchFeedback::EarlyPunchOut => "Early punch out.",
        }
    }
}

#[derive(Debug, Clone)]
pub struct PunchOutcome {
    pub kind: PunchKind,
    pub time: NaiveTime,
    pub sessions: Vec<Session>,
    pub feedback: Option<PunchFeedback>,
}

pub struct PunchLogic;

impl PunchLogic {
    /// An open session means the next punch closes it.
    pub fn next_kind(record: &DayRecord) -> PunchKind {
        if record.open_session().is_some() {
            PunchKind::Out
        } else {
            PunchKind::In
        }
    }

    /// Sessions after applying a punch. Punching the same direction twice
    /// corrects the previous time instead of opening a second interval.
    pub fn apply(record: &DayRecord, kind: PunchKind, time: NaiveTime) -> AppResult<Vec<Session>> {
        let mut sessions = record.sessions.clone();

        match kind {
            PunchKind::In => match sessions.last_mut() {
                Some(last) if last.is_open() || last.is_blank() => last.in_time = Some(time),
                _ => sessions.push(Session::open(time)),
            },
            PunchKind::Out => match sessions.last_mut() {
                Some(last) if last.in_time.is_some() => last.out_time = Some(time),
                _ => return Err(AppError::NoOpenSession(record.date)),
            },
        }

        Ok(sessions)
    }

    pub fn feedback(record: &DayRecord, kind: PunchKind, time: NaiveTime) -> Option<PunchFeedback> {
        let (start, end) = record.shift()?;
        let shift = Span::on(record.date, start, end);

        match kind {
            PunchKind::In => {
                (record.date.and_time(time) < shift.start).then_some(PunchFeedback::CameEarly)
            }
            PunchKind::Out => {
                let out = punch_out_instant(record, time);
                (out < shift.end).then_some(PunchFeedback::EarlyPunchOut)
            }
        }
    }

    /// Read today's record, apply the punch and merge it back.
    ///
    /// Only `sessions`, ownership fields, non-empty `notes` and (when the
    /// record has none yet) `manager` are written; everything else on the
    /// document is preserved.
    pub fn punch<S: DocumentStore + ?Sized>(
        store: &mut S,
        identity: &Identity,
        req: &PunchRequest,
    ) -> AppResult<PunchOutcome> {
        let record = load_day(store, &identity.user_id, req.date)?;

        let kind = req.kind.unwrap_or_else(|| Self::next_kind(&record));
        let sessions = Self::apply(&record, kind, req.time)?;
        let feedback = Self::feedback(&record, kind, req.time);

        let mut patch = DayDocument::default()
            .with_sessions(&sessions)
            .owned_by(&identity.user_id, req.date);

        patch.notes = req.notes.clone().filter(|n| !n.trim().is_empty());
        if record.manager.is_none() {
            patch.manager = req.manager.clone().filter(|m| !m.trim().is_empty());
        }

        merge_day(store, &identity.user_id, req.date, patch)?;

        Ok(PunchOutcome {
            kind,
            time: req.time,
            sessions,
            feedback,
        })
    }
}

/// Punch-out instant, on the next day when it precedes the open session's in.
fn punch_out_instant(record: &DayRecord, time: NaiveTime) -> NaiveDateTime {
    let in_time = record
        .sessions
        .last()
        .and_then(|s| s.in_time)
        .unwrap_or(NaiveTime::MIN);

    if time < in_time {
        record
            .date
            .checked_add_days(Days::new(1))
            .unwrap_or(record.date)
            .and_time(time)
    } else {
        record.date.and_time(time)
    }
}
