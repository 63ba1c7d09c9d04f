use serde::{Deserialize, Serialize};

/// A counselor's directory listing.
///
/// Serialized with camelCase field names so the durable JSON matches the
/// original collection format under the `counselors` key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Counselor {
    pub id: String,
    pub name: String,
    pub title: String,
    pub credentials: String,
    pub denomination: String,
    pub image_url: String,
    pub specialties: Vec<String>,
    pub location: String,
    pub bio: String,
    pub email: String,
    pub paypal_link: String,
    pub availability: Vec<String>,
    pub hourly_rate: f64,
    pub education: String,
    pub accreditation: Vec<String>,
    pub gender: String,
    pub years_experience: u32,
    pub accepting_clients: bool,
}

impl Counselor {
    /// Does any free-text haystack of this profile contain `term`?
    /// Case-insensitive; searched across name, specialties, bio,
    /// credentials and denomination.
    pub fn matches_text(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self
                .specialties
                .iter()
                .any(|s| s.to_lowercase().contains(&term))
            || self.bio.to_lowercase().contains(&term)
            || self.credentials.to_lowercase().contains(&term)
            || self.denomination.to_lowercase().contains(&term)
    }
}

/// Input for creating a new counselor profile; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewCounselor {
    pub name: String,
    pub title: String,
    pub credentials: String,
    pub denomination: String,
    pub image_url: String,
    pub specialties: Vec<String>,
    pub location: String,
    pub bio: String,
    pub email: String,
    pub paypal_link: String,
    pub availability: Vec<String>,
    pub hourly_rate: f64,
    pub education: String,
    pub accreditation: Vec<String>,
    pub gender: String,
    pub years_experience: u32,
    pub accepting_clients: bool,
}
