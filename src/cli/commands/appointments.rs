use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth;
use crate::core::store::Store;
use crate::db;
use crate::db::log;
use crate::errors::AppResult;
use crate::models::appointment::AppointmentStatus;
use crate::models::role::Role;
use crate::models::user::User;
use crate::ui::messages;
use crate::utils::date;
use crate::utils::table::Table;

/// Handle `appointments`, `complete` and `cancel`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let pool = db::open(&cfg.database)?;

    let Some(user) = auth::current_user(&pool)? else {
        messages::locked("Log in to see or manage appointments.");
        return Ok(());
    };

    let mut store = Store::open(pool)?;

    match cmd {
        Commands::Appointments { all } => list(&store, &user, *all, cfg),
        Commands::Complete { id } => {
            transition(&mut store, &user, id, AppointmentStatus::Completed)
        }
        Commands::Cancel { id } => {
            transition(&mut store, &user, id, AppointmentStatus::Cancelled)
        }
        _ => Ok(()),
    }
}

/// Appointments visible to `user`: clients see their own bookings,
/// counselors the sessions booked with them, admins everything.
fn list(store: &Store, user: &User, all: bool, cfg: &Config) -> AppResult<()> {
    let visible: Vec<_> = store
        .appointments()
        .iter()
        .filter(|a| match user.role {
            Role::Admin => true,
            Role::Counselor => a.counselor_id == user.id,
            Role::Client => a.client_id == user.id,
        })
        .filter(|a| all || a.status.is_scheduled())
        .collect();

    if visible.is_empty() {
        println!("No appointments to show.");
        return Ok(());
    }

    let mut table = Table::new(vec!["ID", "Date", "Counselor", "Client", "Status"]);
    for a in &visible {
        table.add_row(vec![
            a.id.clone(),
            date::display_date_time(&a.date),
            store.counselor_name(&a.counselor_id),
            a.client_name.clone(),
            a.status.as_str().to_string(),
        ]);
    }

    table.print(&cfg.separator_char);
    println!();
    println!("📅 {} appointments", visible.len());
    Ok(())
}

/// Move a scheduled appointment to `target`. Owner-side only: the
/// counselor the session is booked with, or an admin.
fn transition(
    store: &mut Store,
    user: &User,
    id: &str,
    target: AppointmentStatus,
) -> AppResult<()> {
    let Some(appointment) = store.appointment_by_id(id).cloned() else {
        messages::warning(format!("Appointment '{}' not found.", id));
        return Ok(());
    };

    let owns = user.role.is_admin()
        || (user.role.is_counselor() && appointment.counselor_id == user.id);
    if !owns {
        messages::warning("Only the counselor this session is booked with (or an admin) can update it.");
        return Ok(());
    }

    if !appointment.status.is_scheduled() {
        messages::warning(format!(
            "Appointment is already {}.",
            appointment.status.as_str()
        ));
        return Ok(());
    }

    let mut updated = appointment;
    updated.status = target;
    store.update_appointment(updated)?;

    let _ = log::oplog(&store.pool().conn, target.as_str(), id, &user.id);

    messages::success(format!("Appointment marked {}.", target.as_str()));
    Ok(())
}
