use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for timewise
#[derive(Parser)]
#[command(
    name = "timewise",
    version = env!("CARGO_PKG_VERSION"),
    about = "Schedule shifts, punch in/out and build half-month timesheets",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Act as this user id instead of the configured one
    #[arg(global = true, long = "user")]
    pub user: Option<String>,

    /// E-mail of the acting user (admin rights are derived from it)
    #[arg(global = true, long = "email")]
    pub email: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Punch in or out (direction picked from today's state unless forced)
    Punch {
        #[arg(long = "in", conflicts_with = "punch_out", help = "Force a punch-in")]
        punch_in: bool,

        #[arg(long = "out", help = "Force a punch-out")]
        punch_out: bool,

        #[arg(long = "at", help = "Punch time (HH:MM), default now")]
        at: Option<String>,

        #[arg(long = "date", help = "Day to punch (YYYY-MM-DD), default today")]
        date: Option<String>,

        #[arg(long = "notes", help = "Shift notes")]
        notes: Option<String>,

        #[arg(long = "manager", help = "Manager on duty (kept if already set)")]
        manager: Option<String>,
    },

    /// Write the schedule for a whole week or a single day
    Schedule {
        #[command(subcommand)]
        action: ScheduleAction,
    },

    /// Show a week's schedule, punches and totals
    Week {
        #[arg(long = "week", help = "Any day of the week to show (YYYY-MM-DD), default today")]
        week: Option<String>,
    },

    /// Show the half-month timesheet for a month
    Timesheet {
        #[arg(long = "month", help = "Month to show (YYYY-MM), default current")]
        month: Option<String>,
    },

    /// Export a month's timesheet
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long = "month", help = "Month to export (YYYY-MM), default current")]
        month: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

#[derive(Subcommand)]
pub enum ScheduleAction {
    /// Write all seven days of a week
    Week {
        /// Any day of the target week (YYYY-MM-DD)
        date: String,

        #[arg(
            long = "shift",
            help = "Shift for working days (HH:MM-HH:MM), default from config"
        )]
        shift: Option<String>,

        #[arg(
            long = "status",
            help = "Status for days not listed elsewhere: working, on-call, not-available"
        )]
        status: Option<String>,

        #[arg(
            long = "on-call",
            value_delimiter = ',',
            help = "Weekdays on call (mon,tue,...)"
        )]
        on_call: Vec<String>,

        #[arg(
            long = "off",
            value_delimiter = ',',
            help = "Weekdays not available (mon,tue,...)"
        )]
        off: Vec<String>,
    },

    /// Edit a single day
    Day {
        /// Day to edit (YYYY-MM-DD)
        date: String,

        #[arg(long = "status", default_value = "working")]
        status: String,

        #[arg(long = "shift", help = "Shift (HH:MM-HH:MM), default from config")]
        shift: Option<String>,

        #[arg(
            long = "session",
            help = "Punch session (HH:MM-HH:MM); repeat to replace all sessions"
        )]
        sessions: Vec<String>,

        #[arg(long = "notes")]
        notes: Option<String>,

        #[arg(long = "manager")]
        manager: Option<String>,
    },
}
