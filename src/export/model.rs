// src/export/model.rs

use crate::core::timesheet::{Timesheet, TimesheetRow};
use crate::utils::time::format_minutes;
use serde::Serialize;

/// Flat row for CSV / XLSX.
#[derive(Serialize, Clone, Debug)]
pub struct RowExport {
    pub half: String,
    pub user_id: String,
    pub date: String,
    pub day: String,
    pub start: String,
    pub end: String,
    pub punch_in: String,
    pub punch_out: String,
    pub total: String,
    pub worked_minutes: i64,
    pub notes: String,
    pub manager: String,
}

impl RowExport {
    fn new(half: &str, r: &TimesheetRow) -> Self {
        Self {
            half: half.to_string(),
            user_id: r.user_id.clone(),
            date: r.date.clone(),
            day: r.weekday.clone(),
            start: r.schedule_start.clone(),
            end: r.schedule_end.clone(),
            punch_in: r.punch_in.clone(),
            punch_out: r.punch_out.clone(),
            total: r.total.clone(),
            worked_minutes: r.worked_minutes,
            notes: r.notes.clone(),
            manager: r.manager.clone(),
        }
    }
}

/// Nested shape for JSON: halves with their totals.
#[derive(Serialize, Clone, Debug)]
pub struct HalfExport {
    pub half: String,
    pub scheduled_total: String,
    pub completed_total: String,
    pub rows: Vec<TimesheetRow>,
}

#[derive(Serialize, Clone, Debug)]
pub struct TimesheetExport {
    pub month: String,
    pub all_users: bool,
    pub halves: Vec<HalfExport>,
}

impl From<&Timesheet> for TimesheetExport {
    fn from(t: &Timesheet) -> Self {
        Self {
            month: t.month.format("%Y-%m").to_string(),
            all_users: t.all_users,
            halves: t
                .halves
                .iter()
                .map(|h| HalfExport {
                    half: h.half.label().to_string(),
                    scheduled_total: format_minutes(h.totals.scheduled_minutes),
                    completed_total: format_minutes(h.totals.worked_minutes),
                    rows: h.rows.clone(),
                })
                .collect(),
        }
    }
}

pub(crate) fn flatten(t: &Timesheet) -> Vec<RowExport> {
    t.halves
        .iter()
        .flat_map(|h| h.rows.iter().map(move |r| RowExport::new(h.half.label(), r)))
        .collect()
}

/// Header for CSV / XLSX, in `RowExport` field order.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "half",
        "user_id",
        "date",
        "day",
        "start",
        "end",
        "punch_in",
        "punch_out",
        "total",
        "worked_minutes",
        "notes",
        "manager",
    ]
}

pub(crate) fn row_to_cells(e: &RowExport) -> Vec<String> {
    vec![
        e.half.clone(),
        e.user_id.clone(),
        e.date.clone(),
        e.day.clone(),
        e.start.clone(),
        e.end.clone(),
        e.punch_in.clone(),
        e.punch_out.clone(),
        e.total.clone(),
        e.worked_minutes.to_string(),
        e.notes.clone(),
        e.manager.clone(),
    ]
}
