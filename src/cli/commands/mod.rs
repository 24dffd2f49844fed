pub mod backup;
pub mod config;
pub mod export;
pub mod init;
pub mod log;
pub mod punch;
pub mod schedule;
pub mod timesheet;
pub mod week;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::identity::Identity;
use crate::utils::date;
use chrono::NaiveDate;

/// Identity for commands that act on behalf of a user.
pub(crate) fn identity(cli: &Cli, cfg: &Config) -> AppResult<Identity> {
    cfg.identity(cli.user.as_deref(), cli.email.as_deref())
}

/// Parse an optional `YYYY-MM-DD` argument, defaulting to today.
pub(crate) fn date_or_today(arg: Option<&String>) -> AppResult<NaiveDate> {
    match arg {
        Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string())),
        None => Ok(date::today()),
    }
}

/// Parse an optional `YYYY-MM` argument, defaulting to the current month.
pub(crate) fn month_or_current(arg: Option<&String>) -> AppResult<NaiveDate> {
    match arg {
        Some(s) => date::parse_month(s),
        None => Ok(date::current_month()),
    }
}
