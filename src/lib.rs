//! gracedesk library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Register { .. }
        | Commands::Login { .. }
        | Commands::Logout
        | Commands::Whoami => cli::commands::auth::handle(&cli.command, cfg),
        Commands::Browse { .. } => cli::commands::browse::handle(&cli.command, cfg),
        Commands::Show { .. } => cli::commands::show::handle(&cli.command, cfg),
        Commands::Join { .. } => cli::commands::join::handle(&cli.command, cfg),
        Commands::Book { .. } => cli::commands::book::handle(&cli.command, cfg),
        Commands::Appointments { .. } | Commands::Complete { .. } | Commands::Cancel { .. } => {
            cli::commands::appointments::handle(&cli.command, cfg)
        }
        Commands::Send { .. } | Commands::Inbox { .. } | Commands::Read { .. } => {
            cli::commands::message::handle(&cli.command, cfg)
        }
        Commands::Bill { .. } | Commands::Invoices { .. } | Commands::Pay { .. } => {
            cli::commands::invoice::handle(&cli.command, cfg)
        }
        Commands::Dashboard => cli::commands::dashboard::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1. parse CLI
    let cli = Cli::parse();

    // 2. load config once
    let mut cfg = Config::load();

    // 3. apply a command-line database override, if any
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    // 4. hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
