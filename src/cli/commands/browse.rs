use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::{ExperienceRange, SearchFilters};
use crate::core::store::Store;
use crate::db;
use crate::errors::AppResult;
use crate::utils::format;
use crate::utils::table::Table;

/// Browse and filter the counselor directory.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Browse {
        search,
        specialties,
        location,
        education,
        accreditation,
        denomination,
        gender,
        experience,
    } = cmd
    {
        //
        // 1. Build the filter set; absent flags impose no constraint
        //
        let filters = SearchFilters {
            search: search.clone().unwrap_or_default(),
            specialties: specialties.clone(),
            location: location.clone().unwrap_or_default(),
            education: education.clone().unwrap_or_default(),
            accreditation: accreditation.clone().unwrap_or_default(),
            denomination: denomination.clone().unwrap_or_default(),
            gender: gender.clone().unwrap_or_default(),
            experience: match experience {
                Some(code) => ExperienceRange::parse(code)?,
                None => None,
            },
        };

        //
        // 2. Load the directory and apply the filter
        //
        let pool = db::open(&cfg.database)?;
        let store = Store::open(pool)?;
        let matches = filters.apply(store.counselors());

        //
        // 3. Render
        //
        if store.counselors().is_empty() {
            println!("No counselors available at this time.");
            return Ok(());
        }

        if matches.is_empty() {
            println!("No counselors found matching your criteria.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            "ID",
            "Name",
            "Location",
            "Specialties",
            "Rate",
            "Years",
            "Accepting",
        ]);

        for c in &matches {
            table.add_row(vec![
                c.id.clone(),
                c.name.clone(),
                c.location.clone(),
                format::truncate(&format::join_tags(&c.specialties), 36),
                format::currency(&cfg.currency_symbol, c.hourly_rate),
                c.years_experience.to_string(),
                format::yes_no(c.accepting_clients).to_string(),
            ]);
        }

        table.print(&cfg.separator_char);
        println!();
        println!("👥 {} counselors found", matches.len());

        if !filters.is_empty() {
            println!("Filtering by: {}", describe(&filters));
        }
    }

    Ok(())
}

/// Short list of the active criteria, e.g. "2 specialties, gender".
fn describe(filters: &SearchFilters) -> String {
    let mut parts = Vec::new();
    if !filters.search.is_empty() {
        parts.push("search".to_string());
    }
    if !filters.specialties.is_empty() {
        parts.push(format!("{} specialties", filters.specialties.len()));
    }
    if !filters.location.is_empty() {
        parts.push("location".to_string());
    }
    if !filters.education.is_empty() {
        parts.push("education".to_string());
    }
    if !filters.accreditation.is_empty() {
        parts.push("accreditation".to_string());
    }
    if !filters.denomination.is_empty() {
        parts.push("denomination".to_string());
    }
    if !filters.gender.is_empty() {
        parts.push("gender".to_string());
    }
    if let Some(range) = filters.experience {
        parts.push(format!("experience {}", range.label()));
    }
    parts.join(", ")
}
