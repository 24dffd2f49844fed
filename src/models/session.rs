use crate::utils::time::{format_time, parse_stored_time};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// One punch-in/punch-out interval. Either endpoint may be missing while
/// the user is still on the clock or when an editor left a blank row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Session {
    pub in_time: Option<NaiveTime>,
    pub out_time: Option<NaiveTime>,
}

impl Session {
    pub fn new(in_time: Option<NaiveTime>, out_time: Option<NaiveTime>) -> Self {
        Self { in_time, out_time }
    }

    pub fn closed(in_time: NaiveTime, out_time: NaiveTime) -> Self {
        Self::new(Some(in_time), Some(out_time))
    }

    pub fn open(in_time: NaiveTime) -> Self {
        Self::new(Some(in_time), None)
    }

    /// Punched in, not yet punched out.
    pub fn is_open(&self) -> bool {
        self.in_time.is_some() && self.out_time.is_none()
    }

    /// Placeholder row with neither endpoint.
    pub fn is_blank(&self) -> bool {
        self.in_time.is_none() && self.out_time.is_none()
    }

    /// `00:00`–`00:00` is how editors mark "not punched".
    pub fn is_unpunched_marker(&self) -> bool {
        self.in_time == Some(NaiveTime::MIN) && self.out_time == Some(NaiveTime::MIN)
    }

    /// Endpoints of a session that counts towards worked time.
    pub fn bounds(&self) -> Option<(NaiveTime, NaiveTime)> {
        if self.is_unpunched_marker() {
            return None;
        }
        Some((self.in_time?, self.out_time?))
    }
}

/// Wire shape of a session inside a day document (`{"in": "HH:MM", "out": "HH:MM"}`).
/// Blank strings stand for a missing endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    #[serde(rename = "in", default)]
    pub in_time: Option<String>,
    #[serde(rename = "out", default)]
    pub out_time: Option<String>,
}

impl From<&StoredSession> for Session {
    fn from(s: &StoredSession) -> Self {
        Session::new(
            parse_stored_time(s.in_time.as_deref()),
            parse_stored_time(s.out_time.as_deref()),
        )
    }
}

impl From<&Session> for StoredSession {
    fn from(s: &Session) -> Self {
        StoredSession {
            in_time: Some(s.in_time.map(format_time).unwrap_or_default()),
            out_time: Some(s.out_time.map(format_time).unwrap_or_default()),
        }
    }
}
