use crate::cli::commands::{date_or_today, identity};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::punch::{PunchLogic, PunchRequest};
use crate::db::initialize::open_store;
use crate::errors::{AppError, AppResult};
use crate::models::punch_kind::PunchKind;
use crate::ui::messages::{error, notice, success};
use crate::utils::time::{format_time, now_minute, parse_time};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Punch {
        punch_in,
        punch_out,
        at,
        date,
        notes,
        manager,
    } = &cli.command
    {
        let who = identity(cli, cfg)?;
        let d = date_or_today(date.as_ref())?;

        let time = match at {
            Some(s) => parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?,
            None => now_minute(),
        };

        let kind = if *punch_in {
            Some(PunchKind::In)
        } else if *punch_out {
            Some(PunchKind::Out)
        } else {
            None
        };

        let req = PunchRequest {
            date: d,
            time,
            kind,
            notes: notes.clone(),
            manager: manager.clone(),
        };

        let mut pool = open_store(&cfg.database)?;

        let outcome = match PunchLogic::punch(&mut pool, &who, &req) {
            Ok(o) => o,
            Err(e) => {
                error("Failed to punch. Try again.");
                return Err(e);
            }
        };

        success(format!(
            "Punched {} at {} on {}",
            outcome.kind.as_str(),
            format_time(outcome.time),
            d
        ));

        if let Some(fb) = outcome.feedback {
            notice(fb.message());
        }
    }

    Ok(())
}
