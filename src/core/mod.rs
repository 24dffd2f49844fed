pub mod backup;
pub mod calculator;
pub mod log;
pub mod punch;
pub mod schedule;
pub mod timesheet;
pub mod week;
