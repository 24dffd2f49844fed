use chrono::NaiveTime;

/// Per-day durations derived from a record.
///
/// `first_in`/`last_out` are `None` when no complete session exists, which is
/// distinct from a zero-length day.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DaySummary {
    pub scheduled_minutes: i64,
    pub worked_minutes: i64,
    pub first_in: Option<NaiveTime>,
    pub last_out: Option<NaiveTime>,
}
