//! The filter evaluator.
//!
//! Applies a fixed set of predicates over the counselor collection and
//! returns the profiles satisfying the logical AND of all active
//! criteria. An absent criterion (empty string / empty set / `None`)
//! always passes vacuously, so an empty filter is the identity.

use crate::errors::{AppError, AppResult};
use crate::models::counselor::Counselor;

/// Years-of-experience buckets.
///
/// Bucket edges are asymmetric so a boundary year lands in exactly one
/// bucket: 5 years matches `0-5` but not `5-10`, 10 matches `5-10` but
/// not `10-15`, and `15+` starts above 15.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceRange {
    UpToFive,
    FiveToTen,
    TenToFifteen,
    FifteenPlus,
}

impl ExperienceRange {
    /// Parse a CLI/UI code. Accepts the bare range (`0-5`) and the
    /// labelled form (`0-5 years`); `any` means no filter.
    pub fn parse(code: &str) -> AppResult<Option<Self>> {
        let code = code.trim().trim_end_matches(" years");
        match code {
            "" | "any" | "Any" => Ok(None),
            "0-5" => Ok(Some(ExperienceRange::UpToFive)),
            "5-10" => Ok(Some(ExperienceRange::FiveToTen)),
            "10-15" => Ok(Some(ExperienceRange::TenToFifteen)),
            "15+" => Ok(Some(ExperienceRange::FifteenPlus)),
            other => Err(AppError::InvalidExperience(other.to_string())),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExperienceRange::UpToFive => "0-5 years",
            ExperienceRange::FiveToTen => "5-10 years",
            ExperienceRange::TenToFifteen => "10-15 years",
            ExperienceRange::FifteenPlus => "15+ years",
        }
    }

    pub fn contains(&self, years: u32) -> bool {
        match self {
            ExperienceRange::UpToFive => years <= 5,
            ExperienceRange::FiveToTen => years > 5 && years <= 10,
            ExperienceRange::TenToFifteen => years > 10 && years <= 15,
            ExperienceRange::FifteenPlus => years > 15,
        }
    }
}

/// One browse query. Every field defaults to "no constraint".
#[derive(Debug, Clone, Default)]
pub struct SearchFilters {
    /// Free-text term, OR-matched across name/specialties/bio/credentials/denomination.
    pub search: String,
    /// Match if the profile has at least one of the selected specialties.
    pub specialties: Vec<String>,
    /// Exact match.
    pub location: String,
    /// Exact match.
    pub education: String,
    /// Membership in the profile's accreditation list.
    pub accreditation: String,
    /// Substring of the profile's denomination.
    pub denomination: String,
    /// Exact match.
    pub gender: String,
    pub experience: Option<ExperienceRange>,
}

impl SearchFilters {
    pub fn matches(&self, counselor: &Counselor) -> bool {
        let matches_search = self.search.is_empty() || counselor.matches_text(&self.search);

        let matches_specialties = self.specialties.is_empty()
            || self
                .specialties
                .iter()
                .any(|s| counselor.specialties.contains(s));

        let matches_location = self.location.is_empty() || counselor.location == self.location;

        let matches_education = self.education.is_empty() || counselor.education == self.education;

        let matches_accreditation = self.accreditation.is_empty()
            || counselor.accreditation.contains(&self.accreditation);

        let matches_denomination = self.denomination.is_empty()
            || counselor.denomination.contains(&self.denomination);

        let matches_gender = self.gender.is_empty() || counselor.gender == self.gender;

        let matches_experience = match self.experience {
            None => true,
            Some(range) => range.contains(counselor.years_experience),
        };

        matches_search
            && matches_specialties
            && matches_location
            && matches_education
            && matches_accreditation
            && matches_denomination
            && matches_gender
            && matches_experience
    }

    /// Apply the filter to a collection, preserving order.
    pub fn apply<'a>(&self, counselors: &'a [Counselor]) -> Vec<&'a Counselor> {
        counselors.iter().filter(|c| self.matches(c)).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
            && self.specialties.is_empty()
            && self.location.is_empty()
            && self.education.is_empty()
            && self.accreditation.is_empty()
            && self.denomination.is_empty()
            && self.gender.is_empty()
            && self.experience.is_none()
    }
}
