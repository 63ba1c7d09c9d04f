use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth;
use crate::db;
use crate::db::log;
use crate::errors::AppResult;
use crate::ui::messages;

/// Handle `register`, `login`, `logout` and `whoami`.
///
/// Auth failures are domain outcomes, not program errors: the process
/// exits zero with a user-visible message. Unknown email and wrong
/// password share one generic message on purpose.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let pool = db::open(&cfg.database)?;

    match cmd {
        Commands::Register {
            name,
            email,
            password,
            confirm,
            accept_terms,
        } => {
            //
            // 1. Local validation; nothing is persisted when it fails
            //
            if password != confirm {
                messages::error("Passwords do not match.");
                return Ok(());
            }
            if !*accept_terms {
                messages::error(
                    "You must acknowledge the terms and disclaimer (--accept-terms).",
                );
                return Ok(());
            }

            //
            // 2. Create the account; duplicate email is the one failure mode
            //
            match auth::register(&pool, name, email, password)? {
                Some(user) => {
                    let _ = log::oplog(&pool.conn, "register", &user.id, email);
                    messages::success(format!(
                        "Welcome, {}! You are registered and logged in as a client.",
                        user.name
                    ));
                }
                None => {
                    messages::error("That email address is already registered.");
                }
            }
        }

        Commands::Login { email, password } => {
            match auth::login(&pool, email, password)? {
                Some(user) => {
                    let _ = log::oplog(&pool.conn, "login", &user.id, email);
                    messages::success(format!(
                        "Logged in as {} ({}).",
                        user.name,
                        user.role.as_str()
                    ));

                    // Deferred navigation: honored once, then forgotten
                    if let Some(path) = auth::take_intended_path(&pool)? {
                        messages::info(format!(
                            "Picking up where you left off: gracedesk {}",
                            path
                        ));
                    }
                }
                None => {
                    messages::error("Invalid email or password.");
                }
            }
        }

        Commands::Logout => {
            auth::logout(&pool)?;
            messages::success("Logged out.");
        }

        Commands::Whoami => match auth::current_user(&pool)? {
            Some(user) => {
                println!(
                    "{} <{}> — {} (id {})",
                    user.name,
                    user.email,
                    user.role.as_str(),
                    user.id
                );
            }
            None => {
                messages::info("Not logged in.");
            }
        },

        _ => {}
    }

    Ok(())
}
