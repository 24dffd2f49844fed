use crate::cli::commands::{identity, month_or_current};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::timesheet::{Timesheet, TimesheetHalf, TimesheetLogic};
use crate::db::initialize::open_store;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::{GREEN, colorize_in_out, colorize_optional, paint};
use crate::utils::formatting::{bold, pad_right};
use crate::utils::table::Table;
use crate::utils::time::format_minutes;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Timesheet { month } = &cli.command {
        let who = identity(cli, cfg)?;
        let m = month_or_current(month.as_ref())?;
        let pool = open_store(&cfg.database)?;

        let sheet = TimesheetLogic::load(&pool, &who, m);
        print_sheet(&sheet);
    }

    Ok(())
}

fn print_sheet(sheet: &Timesheet) {
    println!(
        "📋 Timesheets – {}{}",
        sheet.month.format("%B %Y"),
        if sheet.all_users { " (all users)" } else { "" }
    );

    if sheet.rows().next().is_none() {
        info("No records for this month.");
    }

    for half in &sheet.halves {
        print_half(half, sheet.all_users);
    }

    let month = sheet.totals();
    println!(
        "\n{} {} scheduled, {} completed",
        bold("Month:"),
        format_minutes(month.scheduled_minutes),
        format_minutes(month.worked_minutes)
    );
}

fn print_half(half: &TimesheetHalf, all_users: bool) {
    header(half.half.label());

    let mut headers = vec![
        "Date", "Day", "Start", "End", "Punch In", "Punch Out", "Total", "Notes", "Manager",
    ];
    if all_users {
        headers.insert(0, "User");
    }

    let mut table = Table::new(headers);
    for r in &half.rows {
        let mut row = vec![
            r.label.clone(),
            r.weekday.clone(),
            colorize_optional(&r.schedule_start),
            colorize_optional(&r.schedule_end),
            colorize_in_out(&r.punch_in, true),
            colorize_in_out(&r.punch_out, false),
            bold(&r.total),
            r.notes.clone(),
            r.manager.clone(),
        ];
        if all_users {
            row.insert(0, r.user_id.clone());
        }
        table.add_row(row);
    }
    print!("{}", table.render());

    println!(
        "{} {}",
        pad_right("Scheduled Total:", 18),
        bold(&format_minutes(half.totals.scheduled_minutes))
    );
    println!(
        "{} {}",
        pad_right("Completed Total:", 18),
        paint(&format_minutes(half.totals.worked_minutes), GREEN)
    );
}
