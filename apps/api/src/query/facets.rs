//! Distinct-value facets used to populate the filter UI.
//!
//! All three extractors are total over the canonical roster: records with an
//! empty major, no skills, or an absent graduation year simply contribute
//! nothing. Deduplication is case-insensitive while the first-seen casing is
//! preserved for display. Callers sort before presenting.

use std::collections::HashSet;

use crate::models::student::Student;

/// Distinct non-empty majors.
pub fn majors(students: &[Student]) -> Vec<String> {
    distinct(students.iter().map(|s| s.major.as_str()))
}

/// Distinct skills flattened across all records.
pub fn skills(students: &[Student]) -> Vec<String> {
    distinct(students.iter().flat_map(|s| s.skills.iter().map(String::as_str)))
}

/// Distinct derived graduation years; absent years are excluded.
pub fn graduation_years(students: &[Student]) -> Vec<i32> {
    let mut seen = HashSet::new();
    students
        .iter()
        .filter_map(|s| s.graduation_year)
        .filter(|year| seen.insert(*year))
        .collect()
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .filter(|v| seen.insert(v.to_lowercase()))
        .map(str::to_string)
        .collect()
}
