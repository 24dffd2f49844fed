use crate::cli::commands::{identity, month_or_current};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::db::initialize::open_store;
use crate::db::log::ttlog;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        month,
        force,
    } = &cli.command
    {
        let who = identity(cli, cfg)?;
        let m = month_or_current(month.as_ref())?;
        let pool = open_store(&cfg.database)?;

        let rows = ExportLogic::export(&pool, &who, m, *format, file, *force)?;

        if rows > 0 {
            let _ = ttlog(
                &pool.conn,
                "export",
                file,
                &format!("{} rows ({}) for {}", rows, format.as_str(), m.format("%Y-%m")),
            );
        }
    }

    Ok(())
}
