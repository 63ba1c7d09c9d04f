use std::fs;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;

/// Handle the `config` command (view / verify).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            if !path.exists() {
                messages::warning(format!(
                    "No config file at {:?}; run `gracedesk init` first.",
                    path
                ));
                return Ok(());
            }
            let content = fs::read_to_string(&path)?;
            println!("📄 {}", path.display());
            println!();
            print!("{}", content);
            return Ok(());
        }

        if *check {
            if !path.exists() {
                return Err(AppError::Config(format!(
                    "config file not found at {:?}",
                    path
                )));
            }
            let content = fs::read_to_string(&path)?;
            let parsed: Config = serde_yaml::from_str(&content)
                .map_err(|e| AppError::Config(format!("invalid config: {}", e)))?;
            messages::success(format!(
                "Config OK — database: {}",
                parsed.database
            ));
            return Ok(());
        }

        // No flag: short summary of the effective configuration
        println!("Database       : {}", cfg.database);
        println!("Currency symbol: {}", cfg.currency_symbol);
        println!("Bio wrap width : {}", cfg.bio_width);
    }

    Ok(())
}
