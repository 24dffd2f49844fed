use serde::{Deserialize, Serialize};

/// Planned state of a user's day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Scheduled,
    OnCall,
    NotAvailable,
}

impl Status {
    /// Convert enum → document string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Status::Scheduled => "scheduled",
            Status::OnCall => "on_call",
            Status::NotAvailable => "not_available",
        }
    }

    /// Convert document string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "scheduled" => Some(Status::Scheduled),
            "on_call" => Some(Status::OnCall),
            "not_available" => Some(Status::NotAvailable),
            _ => None,
        }
    }

    /// Helper: accept CLI spellings (`working`, `on-call`, `na`, ...).
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().replace('-', "_").as_str() {
            "scheduled" | "working" | "work" | "s" => Some(Status::Scheduled),
            "on_call" | "oncall" | "c" => Some(Status::OnCall),
            "not_available" | "unavailable" | "na" | "n" => Some(Status::NotAvailable),
            _ => None,
        }
    }

    /// Text shown instead of shift times when the day carries no shift.
    pub fn schedule_sentinel(&self) -> Option<&'static str> {
        match self {
            Status::Scheduled => None,
            Status::OnCall => Some("ON CALL"),
            Status::NotAvailable => Some("NOT AVAILABLE"),
        }
    }

    pub fn is_scheduled(&self) -> bool {
        matches!(self, Status::Scheduled)
    }
}
