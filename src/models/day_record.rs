//! Day documents as stored, and the normalized record the calculators work on.

use super::{session::Session, session::StoredSession, status::Status};
use crate::errors::{AppError, AppResult};
use crate::utils::date::{format_date, parse_date};
use crate::utils::time::{format_time, parse_stored_time};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Wire shape of `users/{userId}/weeks/{weekStart}/days/{date}`.
///
/// Every field is optional: the same type describes a full document read
/// from the store and a partial patch handed to a merge-write.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DayDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sessions: Option<Vec<StoredSession>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl DayDocument {
    pub fn from_fields(fields: Map<String, Value>) -> serde_json::Result<Self> {
        serde_json::from_value(Value::Object(fields))
    }

    /// Present fields only, ready to be merged into a stored document.
    pub fn into_fields(self) -> AppResult<Map<String, Value>> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(AppError::Other(format!(
                "day document serialized to non-object: {other}"
            ))),
        }
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status.to_db_str().to_string());
        self
    }

    pub fn with_shift(mut self, start: NaiveTime, end: NaiveTime) -> Self {
        self.start_time = Some(format_time(start));
        self.end_time = Some(format_time(end));
        self
    }

    pub fn with_sessions(mut self, sessions: &[Session]) -> Self {
        self.sessions = Some(sessions.iter().map(StoredSession::from).collect());
        self
    }

    /// Stamp ownership fields carried by every write.
    pub fn owned_by(mut self, user_id: &str, date: NaiveDate) -> Self {
        self.date = Some(format_date(date));
        self.user_id = Some(user_id.to_string());
        self
    }
}

/// Normalized day: both historical punch shapes collapse into `sessions`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub status: Option<Status>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub sessions: Vec<Session>,
    pub notes: Option<String>,
    pub manager: Option<String>,
    pub user_id: Option<String>,
}

impl DayRecord {
    /// Empty record for a date that has no document yet.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            status: None,
            start_time: None,
            end_time: None,
            sessions: Vec::new(),
            notes: None,
            manager: None,
            user_id: None,
        }
    }

    /// Decode a stored document. The record's date is `doc_id`, the date part
    /// of its path; the stored `date` field is only consulted when `doc_id` is
    /// not a date.
    pub fn from_document(doc_id: &str, doc: &DayDocument) -> AppResult<Self> {
        let date = parse_date(doc_id)
            .or_else(|| doc.date.as_deref().and_then(parse_date))
            .ok_or_else(|| AppError::Document {
                path: doc_id.to_string(),
                reason: format!(
                    "invalid date '{}'",
                    doc.date.as_deref().unwrap_or(doc_id)
                ),
            })?;

        let status = match doc.status.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(s) => Some(Status::from_db_str(s).ok_or_else(|| AppError::Document {
                path: doc_id.to_string(),
                reason: format!("unknown status '{s}'"),
            })?),
        };

        // `sessions` wins whenever present, even empty; the single
        // inTime/outTime pair is only consulted on records that predate it.
        let sessions = match &doc.sessions {
            Some(list) => list.iter().map(Session::from).collect(),
            None => {
                let legacy = Session::new(
                    parse_stored_time(doc.in_time.as_deref()),
                    parse_stored_time(doc.out_time.as_deref()),
                );
                if legacy.is_blank() {
                    Vec::new()
                } else {
                    vec![legacy]
                }
            }
        };

        Ok(Self {
            date,
            status,
            start_time: parse_stored_time(doc.start_time.as_deref()),
            end_time: parse_stored_time(doc.end_time.as_deref()),
            sessions,
            notes: non_blank(doc.notes.as_deref()),
            manager: non_blank(doc.manager.as_deref()),
            user_id: non_blank(doc.user_id.as_deref()),
        })
    }

    /// Last session still waiting for a punch-out.
    pub fn open_session(&self) -> Option<&Session> {
        self.sessions.last().filter(|s| s.is_open())
    }

    /// Planned shift, only meaningful on scheduled days.
    pub fn shift(&self) -> Option<(NaiveTime, NaiveTime)> {
        match self.status {
            Some(Status::Scheduled) => Some((self.start_time?, self.end_time?)),
            _ => None,
        }
    }
}

fn non_blank(s: Option<&str>) -> Option<String> {
    s.map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
