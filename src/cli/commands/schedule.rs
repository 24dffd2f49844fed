use crate::cli::commands::identity;
use crate::cli::parser::{Cli, Commands, ScheduleAction};
use crate::config::Config;
use crate::core::schedule::{DayPlan, ScheduleLogic};
use crate::db::initialize::open_store;
use crate::errors::{AppError, AppResult};
use crate::models::session::Session;
use crate::models::status::Status;
use crate::ui::messages::success;
use crate::utils::date::{parse_date, week_days, week_start};
use crate::utils::time::parse_shift;
use chrono::{Datelike, NaiveTime, Weekday};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Schedule { action } = &cli.command {
        let who = identity(cli, cfg)?;
        let mut pool = open_store(&cfg.database)?;

        match action {
            ScheduleAction::Week {
                date,
                shift,
                status,
                on_call,
                off,
            } => {
                let d = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
                let (start, end) = resolve_shift(shift.as_deref(), cfg)?;
                let base = match status {
                    Some(s) => parse_status(s)?,
                    None => Status::Scheduled,
                };
                let on_call = parse_weekdays(on_call)?;
                let off = parse_weekdays(off)?;

                let days = week_days(week_start(d));
                let plans: [DayPlan; 7] = std::array::from_fn(|i| {
                    let wd = days[i].weekday();
                    let status = if off.contains(&wd) {
                        Status::NotAvailable
                    } else if on_call.contains(&wd) {
                        Status::OnCall
                    } else {
                        base
                    };
                    DayPlan::with_status(status).shift(start, end)
                });

                let written = ScheduleLogic::write_week(&mut pool, &who, d, &plans)?;
                success(format!(
                    "Saved schedule for {} day(s), week of {}",
                    written.len(),
                    week_start(d)
                ));
            }

            ScheduleAction::Day {
                date,
                status,
                shift,
                sessions,
                notes,
                manager,
            } => {
                let d = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
                let status = parse_status(status)?;

                let mut plan = DayPlan::with_status(status);
                if status.is_scheduled() {
                    let (start, end) = resolve_shift(shift.as_deref(), cfg)?;
                    plan = plan.shift(start, end);
                }
                if !sessions.is_empty() {
                    plan.sessions = Some(parse_sessions(sessions)?);
                }
                plan.notes = notes.clone();
                plan.manager = manager.clone();

                ScheduleLogic::write_day(&mut pool, &who, d, &plan)?;
                success(format!("Saved schedule for {}", d));
            }
        }
    }

    Ok(())
}

fn parse_status(s: &str) -> AppResult<Status> {
    Status::from_code(s).ok_or_else(|| AppError::InvalidStatus(s.to_string()))
}

fn resolve_shift(arg: Option<&str>, cfg: &Config) -> AppResult<(NaiveTime, NaiveTime)> {
    match arg {
        Some(s) => parse_shift(s),
        None => cfg.default_shift(),
    }
}

fn parse_weekdays(list: &[String]) -> AppResult<Vec<Weekday>> {
    list.iter()
        .map(|s| {
            s.trim()
                .parse::<Weekday>()
                .map_err(|_| AppError::InvalidDate(format!("unknown weekday '{}'", s)))
        })
        .collect()
}

fn parse_sessions(list: &[String]) -> AppResult<Vec<Session>> {
    list.iter()
        .map(|s| parse_shift(s).map(|(a, b)| Session::closed(a, b)))
        .collect()
}
