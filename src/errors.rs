//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use chrono::NaiveDate;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Store-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Malformed document at {path}: {reason}")]
    Document { path: String, reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid shift (expected HH:MM-HH:MM): {0}")]
    InvalidShift(String),

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    #[error("Invalid month (expected YYYY-MM): {0}")]
    InvalidMonth(String),

    // ---------------------------
    // Identity
    // ---------------------------
    #[error("Not authenticated: set `user_id` in the config file or pass --user")]
    NotAuthenticated,

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Cannot punch out on {0}: no punch-in recorded")]
    NoOpenSession(NaiveDate),

    #[error("Week write stopped at {failed}: {written} day(s) saved before the failure ({reason})")]
    PartialWeekWrite {
        written: usize,
        failed: NaiveDate,
        reason: String,
    },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
