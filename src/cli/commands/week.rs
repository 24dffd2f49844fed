use crate::cli::commands::{date_or_today, identity};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::calculator::duration::Span;
use crate::core::week::{WeekDay, WeekLogic};
use crate::db::initialize::open_store;
use crate::errors::AppResult;
use crate::models::status::Status;
use crate::utils::colors::{colorize_in_out, colorize_optional, paint};
use crate::utils::date::{today, weekday_name};
use crate::utils::formatting::{bold, describe_status, mins2readable};
use crate::utils::table::Table;
use crate::utils::time::{format_hours_decimal, format_minutes, format_time};
use chrono::Days;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Week { week } = &cli.command {
        let who = identity(cli, cfg)?;
        let d = date_or_today(week.as_ref())?;
        let pool = open_store(&cfg.database)?;

        let view = WeekLogic::load(&pool, &who, d);
        let week_end = view.week_start.checked_add_days(Days::new(6)).unwrap_or(view.week_start);

        println!(
            "🗓  Week of {} – {}\n",
            view.week_start.format("%B %-d, %Y"),
            week_end.format("%B %-d, %Y")
        );

        let mut table = Table::new(vec![
            "Day", "Date", "Status", "Shift", "Sessions", "Worked", "Manager", "Notes",
        ]);
        for day in &view.days {
            table.add_row(day_row(day));
        }
        print!("{}", table.render());

        println!("\n{}", bold("Weekly Summary"));
        println!(
            "  Scheduled Hours: {} hrs ({})",
            format_hours_decimal(view.totals.scheduled_minutes),
            format_minutes(view.totals.scheduled_minutes)
        );
        println!(
            "  Worked Hours:    {} hrs ({})",
            format_hours_decimal(view.totals.worked_minutes),
            format_minutes(view.totals.worked_minutes)
        );
    }

    Ok(())
}

fn day_row(day: &WeekDay) -> Vec<String> {
    let mut name = weekday_name(day.date).to_string();
    if day.date == today() {
        name = bold(&name);
    }

    let Some(record) = &day.record else {
        return vec![
            name,
            day.date.to_string(),
            colorize_optional("No shifts scheduled."),
        ];
    };

    let status = match record.status {
        Some(s) => {
            let (label, color) = describe_status(s);
            paint(label, color)
        }
        None => colorize_optional(""),
    };

    let shift = match (record.status, record.shift()) {
        (Some(Status::Scheduled), Some((start, end))) => {
            let next_day = if Span::on(day.date, start, end).crosses_midnight() {
                " (+1)"
            } else {
                ""
            };
            format!("{} – {}{}", format_time(start), format_time(end), next_day)
        }
        _ => colorize_optional("--:--"),
    };

    let sessions = record
        .sessions
        .iter()
        .filter_map(|s| s.bounds())
        .map(|(a, b)| {
            format!(
                "{}–{}",
                colorize_in_out(&format_time(a), true),
                colorize_in_out(&format_time(b), false)
            )
        })
        .collect::<Vec<_>>()
        .join(", ");

    vec![
        name,
        day.date.to_string(),
        status,
        shift,
        if sessions.is_empty() {
            colorize_optional("N/A")
        } else {
            sessions
        },
        mins2readable(day.summary.worked_minutes),
        record.manager.clone().unwrap_or_default(),
        record.notes.clone().unwrap_or_default(),
    ]
}
