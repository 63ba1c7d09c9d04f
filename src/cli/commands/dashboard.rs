use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth;
use crate::core::store::Store;
use crate::db;
use crate::errors::AppResult;
use crate::models::appointment::AppointmentStatus;
use crate::models::role::Role;
use crate::models::user::User;
use crate::ui::messages;
use crate::utils::date;

/// Role-based overview of the platform.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Dashboard = cmd {
        let pool = db::open(&cfg.database)?;

        let Some(user) = auth::current_user(&pool)? else {
            messages::locked("Log in to see your dashboard.");
            return Ok(());
        };

        let store = Store::open(pool)?;

        match user.role {
            Role::Admin => admin(&store),
            Role::Counselor => counselor(&store, &user, cfg),
            Role::Client => client(&store, &user),
        }
    }

    Ok(())
}

fn admin(store: &Store) {
    messages::header("Admin Dashboard");

    let total_counselors = store.counselors().len();
    let total_appointments = store.appointments().len();
    let upcoming = store
        .appointments()
        .iter()
        .filter(|a| a.status.is_scheduled() && date::is_upcoming(&a.date))
        .count();
    let completed = store
        .appointments()
        .iter()
        .filter(|a| a.status == AppointmentStatus::Completed)
        .count();
    let pending_invoices = store
        .invoices()
        .iter()
        .filter(|i| i.status.is_pending())
        .count();

    println!("Total counselors   : {}", total_counselors);
    println!("Total appointments : {}", total_appointments);
    println!("Upcoming sessions  : {}", upcoming);
    println!("Completed sessions : {}", completed);
    println!("Pending invoices   : {}", pending_invoices);
    println!();

    println!("Newest listings:");
    for c in store.counselors().iter().rev().take(3) {
        println!("  {} — {} ({})", c.id, c.name, c.location);
    }
}

fn counselor(store: &Store, user: &User, cfg: &Config) {
    messages::header(format!("Counselor Dashboard — {}", user.name));

    let mine: Vec<_> = store
        .appointments()
        .iter()
        .filter(|a| a.counselor_id == user.id)
        .collect();
    let upcoming: Vec<_> = mine
        .iter()
        .filter(|a| a.status.is_scheduled() && date::is_upcoming(&a.date))
        .collect();
    let unread = store
        .messages()
        .iter()
        .filter(|m| m.is_unread_for(&user.id))
        .count();
    let owed: f64 = store
        .invoices()
        .iter()
        .filter(|i| i.counselor_id == user.id && i.status.is_pending())
        .map(|i| i.amount)
        .sum();

    println!("Sessions on file : {}", mine.len());
    println!("Upcoming         : {}", upcoming.len());
    println!("Unread messages  : {}", unread);
    println!(
        "Platform fees due: {}",
        crate::utils::format::currency(&cfg.currency_symbol, owed)
    );
    println!();

    if !upcoming.is_empty() {
        println!("Next sessions:");
        for a in upcoming.iter().take(5) {
            println!(
                "  {} — {} with {}",
                a.id,
                date::display_date_time(&a.date),
                a.client_name
            );
        }
    }
}

fn client(store: &Store, user: &User) {
    messages::header(format!("Welcome back, {}", user.name));

    let mine: Vec<_> = store
        .appointments()
        .iter()
        .filter(|a| a.client_id == user.id)
        .collect();
    let upcoming: Vec<_> = mine
        .iter()
        .filter(|a| a.status.is_scheduled() && date::is_upcoming(&a.date))
        .collect();
    let unread = store
        .messages()
        .iter()
        .filter(|m| m.is_unread_for(&user.id))
        .count();

    println!("Your sessions   : {}", mine.len());
    println!("Upcoming        : {}", upcoming.len());
    println!("Unread messages : {}", unread);
    println!();

    if upcoming.is_empty() {
        println!("No upcoming sessions. Run `gracedesk browse` to find a counselor.");
    } else {
        println!("Next sessions:");
        for a in upcoming.iter().take(5) {
            println!(
                "  {} — {} with {}",
                a.id,
                date::display_date_time(&a.date),
                store.counselor_name(&a.counselor_id)
            );
        }
    }
}
