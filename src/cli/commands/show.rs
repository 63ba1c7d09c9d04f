use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::Store;
use crate::db;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::format;

/// Show one counselor profile in full.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let pool = db::open(&cfg.database)?;
        let store = Store::open(pool)?;

        // Missing ids are a display concern, not a failure
        let Some(c) = store.counselor_by_id(id) else {
            messages::warning(format!("Counselor '{}' not found.", id));
            return Ok(());
        };

        messages::header(&c.name);
        println!("{} — {}", c.title, c.credentials);
        println!();
        println!("Denomination : {}", c.denomination);
        println!("Location     : {}", c.location);
        println!("Education    : {}", c.education);
        println!("Accreditation: {}", format::join_tags(&c.accreditation));
        println!("Gender       : {}", c.gender);
        println!("Experience   : {} years", c.years_experience);
        println!("Specialties  : {}", format::join_tags(&c.specialties));
        println!("Availability : {}", format::join_tags(&c.availability));
        println!(
            "Rate         : {}/hour",
            format::currency(&cfg.currency_symbol, c.hourly_rate)
        );
        println!(
            "Accepting new clients: {}",
            format::yes_no(c.accepting_clients)
        );
        println!();
        println!("{}", format::wrap_bio(&c.bio, cfg.bio_width));
        println!();
        println!("Contact: {}  |  {}", c.email, c.paypal_link);
    }

    Ok(())
}
