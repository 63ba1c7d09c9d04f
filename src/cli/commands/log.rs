use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db;
use crate::db::log::load_log;
use crate::errors::AppResult;

/// Print the internal log table.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd {
        if !*print {
            println!("Nothing to do. Use `gracedesk log --print`.");
            return Ok(());
        }

        let pool = db::open(&cfg.database)?;
        let rows = load_log(&pool.conn)?;

        if rows.is_empty() {
            println!("Log is empty.");
            return Ok(());
        }

        for (date, operation, target, message) in rows {
            println!("{} | {:<10} | {:<36} | {}", date, operation, target, message);
        }
    }

    Ok(())
}
