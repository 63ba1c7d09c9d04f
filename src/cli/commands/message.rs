use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth;
use crate::core::store::Store;
use crate::db;
use crate::db::log;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::date;
use crate::utils::format;

/// Handle `send`, `inbox` and `read`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let pool = db::open(&cfg.database)?;

    //
    // 1. All messaging requires a session
    //
    let Some(user) = auth::current_user(&pool)? else {
        if let Commands::Send { to, .. } = cmd {
            auth::stash_intended_path(&pool, &format!("send {}", to))?;
        }
        messages::locked(
            "You need to be logged in to contact counselors. \
             Run `gracedesk login` and try again.",
        );
        return Ok(());
    };

    let mut store = Store::open(pool)?;

    match cmd {
        Commands::Send { to, content } => {
            let id = store.add_message(&user.id, &user.name, to, content)?;
            let _ = log::oplog(&store.pool().conn, "send", &id, to);
            messages::success(format!("Message sent to {}.", party_name(&store, to)));
            println!("Message id: {}", id);
        }

        Commands::Inbox { unread } => {
            let visible: Vec<_> = store
                .messages()
                .iter()
                .filter(|m| {
                    if *unread {
                        m.is_unread_for(&user.id)
                    } else {
                        m.involves(&user.id)
                    }
                })
                .collect();

            if visible.is_empty() {
                println!("No messages to show.");
                return Ok(());
            }

            for m in &visible {
                let direction = if m.sender_id == user.id {
                    format!("to {}", party_name(&store, &m.receiver_id))
                } else {
                    format!("from {}", m.sender_name)
                };
                let marker = if m.is_unread_for(&user.id) {
                    "● "
                } else {
                    "  "
                };
                println!(
                    "{}{} — {} [{}]",
                    marker,
                    date::display_date_time(&m.timestamp),
                    direction,
                    m.id
                );
                messages::detail(format::truncate(&m.content, 96));
            }

            let unread_count = store
                .messages()
                .iter()
                .filter(|m| m.is_unread_for(&user.id))
                .count();
            println!();
            println!("✉️  {} messages, {} unread", visible.len(), unread_count);
        }

        Commands::Read { id } => {
            let Some(message) = store.message_by_id(id) else {
                messages::warning(format!("Message '{}' not found.", id));
                return Ok(());
            };

            if message.receiver_id != user.id {
                messages::warning("Only the receiver can mark a message as read.");
                return Ok(());
            }

            println!("From: {}", message.sender_name);
            println!("Date: {}", date::display_date_time(&message.timestamp));
            println!();
            println!("{}", message.content);

            store.mark_message_as_read(id)?;
        }

        _ => {}
    }

    Ok(())
}

/// Recipients may be counselors or clients; only counselors are on file
/// in the directory, so everything else renders as a plain client.
fn party_name(store: &Store, id: &str) -> String {
    match store.counselor_by_id(id) {
        Some(c) => c.name.clone(),
        None => format!("client {}", id),
    }
}
