//! Filter evaluator properties, exercised at library level against the
//! built-in sample directory.

use gracedesk::core::filter::{ExperienceRange, SearchFilters};
use gracedesk::core::seed::sample_counselors;

#[test]
fn empty_filter_returns_the_full_collection() {
    let counselors = sample_counselors();
    let filters = SearchFilters::default();

    assert!(filters.is_empty());
    let result = filters.apply(&counselors);
    assert_eq!(result.len(), counselors.len());
}

#[test]
fn free_text_search_is_case_insensitive_and_spans_fields() {
    let counselors = sample_counselors();

    // "anxiety" appears in specialties of c1 and c5
    let filters = SearchFilters {
        search: "ANXIETY".to_string(),
        ..Default::default()
    };
    let ids: Vec<&str> = filters
        .apply(&counselors)
        .iter()
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(ids, vec!["c1", "c5"]);

    // credentials are searched too
    let filters = SearchFilters {
        search: "ccef".to_string(),
        ..Default::default()
    };
    let ids: Vec<&str> = filters
        .apply(&counselors)
        .iter()
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(ids, vec!["c4"]);
}

#[test]
fn specialties_match_any_of_the_selected() {
    let counselors = sample_counselors();

    let filters = SearchFilters {
        specialties: vec!["Grief".to_string(), "Trauma".to_string()],
        ..Default::default()
    };
    let ids: Vec<&str> = filters
        .apply(&counselors)
        .iter()
        .map(|c| c.id.as_str())
        .collect();
    // c2 and c6 have Grief, c3 has Trauma
    assert_eq!(ids, vec!["c2", "c3", "c6"]);
}

#[test]
fn experience_bucket_edges_are_asymmetric() {
    // exactly 5 years belongs to 0-5, not 5-10
    assert!(ExperienceRange::UpToFive.contains(5));
    assert!(!ExperienceRange::FiveToTen.contains(5));

    // exactly 10 years belongs to 5-10, not 10-15
    assert!(ExperienceRange::FiveToTen.contains(10));
    assert!(!ExperienceRange::TenToFifteen.contains(10));

    // exactly 15 years belongs to 10-15, not 15+
    assert!(ExperienceRange::TenToFifteen.contains(15));
    assert!(!ExperienceRange::FifteenPlus.contains(15));

    assert!(ExperienceRange::FifteenPlus.contains(16));
    assert!(ExperienceRange::UpToFive.contains(0));
}

#[test]
fn experience_codes_parse_with_and_without_label() {
    assert_eq!(
        ExperienceRange::parse("10-15").unwrap(),
        Some(ExperienceRange::TenToFifteen)
    );
    assert_eq!(
        ExperienceRange::parse("10-15 years").unwrap(),
        Some(ExperienceRange::TenToFifteen)
    );
    assert_eq!(ExperienceRange::parse("any").unwrap(), None);
    assert_eq!(ExperienceRange::parse("").unwrap(), None);
    assert!(ExperienceRange::parse("7-9").is_err());
}

#[test]
fn anxiety_specialists_with_ten_to_fifteen_years_is_exactly_c1() {
    // c1: specialties [Marriage, Anxiety, Depression], 15 years, Nashville
    let counselors = sample_counselors();

    let filters = SearchFilters {
        specialties: vec!["Anxiety".to_string()],
        experience: Some(ExperienceRange::TenToFifteen),
        ..Default::default()
    };
    let ids: Vec<&str> = filters
        .apply(&counselors)
        .iter()
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(ids, vec!["c1"]);

    // with 15+ the same 15-year profile no longer qualifies
    let filters = SearchFilters {
        specialties: vec!["Anxiety".to_string()],
        experience: Some(ExperienceRange::FifteenPlus),
        ..Default::default()
    };
    assert!(filters.apply(&counselors).is_empty());
}

#[test]
fn all_criteria_combine_with_logical_and() {
    let counselors = sample_counselors();

    let filters = SearchFilters {
        search: "biblical".to_string(),
        location: "Nashville, TN".to_string(),
        gender: "Female".to_string(),
        accreditation: "ACBC".to_string(),
        denomination: "Non-denominational".to_string(),
        ..Default::default()
    };
    let ids: Vec<&str> = filters
        .apply(&counselors)
        .iter()
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(ids, vec!["c1"]);

    // flipping one criterion to a non-matching value empties the result
    let filters = SearchFilters {
        location: "Nashville, TN".to_string(),
        gender: "Male".to_string(),
        ..Default::default()
    };
    assert!(filters.apply(&counselors).is_empty());
}

#[test]
fn denomination_filter_matches_substrings() {
    let counselors = sample_counselors();

    let filters = SearchFilters {
        denomination: "Presbyterian".to_string(),
        ..Default::default()
    };
    let ids: Vec<&str> = filters
        .apply(&counselors)
        .iter()
        .map(|c| c.id.as_str())
        .collect();
    // EPC (c3) and PCA (c4) both contain "Presbyterian"
    assert_eq!(ids, vec!["c3", "c4"]);
}
