use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth;
use crate::core::store::Store;
use crate::db;
use crate::db::log;
use crate::errors::AppResult;
use crate::models::appointment::NewAppointment;
use crate::ui::messages;
use crate::utils::date;

/// Book a session with a counselor.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Book {
        counselor_id,
        date: day,
        time,
        notes,
    } = cmd
    {
        let pool = db::open(&cfg.database)?;

        //
        // 1. Booking requires a session; remember the intent for after login
        //
        let Some(user) = auth::current_user(&pool)? else {
            auth::stash_intended_path(&pool, &format!("book {}", counselor_id))?;
            messages::locked(
                "You need to be logged in to schedule with counselors. \
                 Run `gracedesk login` and try again.",
            );
            return Ok(());
        };

        //
        // 2. Parse the requested slot
        //
        let when = date::parse_date_time(day, time)?;

        //
        // 3. Look up the counselor
        //
        let mut store = Store::open(pool)?;
        let Some(counselor) = store.counselor_by_id(counselor_id) else {
            messages::warning(format!("Counselor '{}' not found.", counselor_id));
            return Ok(());
        };
        let counselor_name = counselor.name.clone();

        if !counselor.accepting_clients {
            messages::warning(format!(
                "{} is not accepting new clients at the moment.",
                counselor_name
            ));
            return Ok(());
        }

        //
        // 4. Create the appointment (scheduled) with a fresh meeting link
        //
        let meeting_link = format!(
            "https://meet.google.com/{}",
            &uuid::Uuid::new_v4().simple().to_string()[..8]
        );

        let id = store.add_appointment(NewAppointment {
            counselor_id: counselor_id.clone(),
            client_id: user.id.clone(),
            client_name: user.name.clone(),
            date: when,
            notes: notes.clone(),
            meeting_link: Some(meeting_link.clone()),
        })?;

        let _ = log::oplog(&store.pool().conn, "book", &id, counselor_id);

        messages::success(format!(
            "Session booked with {} on {}.",
            counselor_name,
            date::display_date_time(&when)
        ));
        println!("Appointment id: {}", id);
        println!("Meeting link:   {}", meeting_link);
    }

    Ok(())
}
