use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::Store;
use crate::db;
use crate::db::log;
use crate::errors::AppResult;
use crate::models::counselor::NewCounselor;
use crate::ui::messages;

/// Join the directory as a counselor: create a new profile.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Join {
        name,
        email,
        title,
        credentials,
        denomination,
        image_url,
        specialties,
        location,
        bio,
        paypal_link,
        availability,
        rate,
        education,
        accreditation,
        gender,
        years_experience,
        not_accepting,
    } = cmd
    {
        let pool = db::open(&cfg.database)?;
        let mut store = Store::open(pool)?;

        let id = store.add_counselor(NewCounselor {
            name: name.clone(),
            title: title.clone(),
            credentials: credentials.clone(),
            denomination: denomination.clone(),
            image_url: image_url.clone(),
            specialties: specialties.clone(),
            location: location.clone(),
            bio: bio.clone(),
            email: email.clone(),
            paypal_link: paypal_link.clone(),
            availability: availability.clone(),
            hourly_rate: *rate,
            education: education.clone(),
            accreditation: accreditation.clone(),
            gender: gender.clone(),
            years_experience: *years_experience,
            accepting_clients: !*not_accepting,
        })?;

        let _ = log::oplog(&store.pool().conn, "join", &id, name);

        messages::success(format!("Profile created for {}.", name));
        println!("Counselor id: {}", id);
        println!("Your application will be reviewed before the listing goes public.");
    }

    Ok(())
}
