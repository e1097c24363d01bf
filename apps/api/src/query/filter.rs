//! Conjunctive filtering over the canonical roster.
//!
//! All criteria are ANDed; an omitted criterion is no constraint. Matching
//! is case-insensitive throughout while the records keep their original
//! casing. The engine boundary emits one structured tracing event per
//! evaluation instead of logging inside predicates.

use tracing::debug;

use crate::models::student::Student;
use crate::query::criteria::Criteria;

/// Returns the students matching every supplied criterion, in roster order.
pub fn filter(students: &[Student], criteria: &Criteria) -> Vec<Student> {
    let matched: Vec<Student> = students
        .iter()
        .filter(|s| matches(s, criteria))
        .cloned()
        .collect();
    debug!(?criteria, matches = matched.len(), "query evaluated");
    matched
}

fn matches(student: &Student, criteria: &Criteria) -> bool {
    matches_search(student, criteria.search.as_deref())
        && matches_university(student, criteria.university.as_deref())
        && matches_major(student, criteria.major.as_deref())
        && matches_skills(student, &criteria.skills)
        && matches_graduation_year(student, criteria.graduation_year)
        && matches_gpa(student, criteria.min_gpa)
}

/// Substring match against full name, reversed name, university, or any
/// skill (OR across those fields).
fn matches_search(student: &Student, search: Option<&str>) -> bool {
    let Some(term) = search else { return true };
    let term = term.trim().to_lowercase();

    let name = student.name.trim().to_lowercase();
    let reversed: String = {
        let mut parts: Vec<&str> = name.split_whitespace().collect();
        parts.reverse();
        parts.join(" ")
    };

    name.contains(&term)
        || reversed.contains(&term)
        || student.university.to_lowercase().contains(&term)
        || student
            .skills
            .iter()
            .any(|skill| skill.to_lowercase().contains(&term))
}

fn matches_university(student: &Student, university: Option<&str>) -> bool {
    let Some(term) = university else { return true };
    student
        .university
        .to_lowercase()
        .contains(&term.trim().to_lowercase())
}

/// Exact case-insensitive equality. The looser mutual-containment variant
/// ("Science" matching "Computer Science") is deliberately not supported.
fn matches_major(student: &Student, major: Option<&str>) -> bool {
    let Some(want) = major else { return true };
    student.major.to_lowercase() == want.trim().to_lowercase()
}

/// Every requested skill must be present among the student's skills,
/// compared case-insensitively.
fn matches_skills(student: &Student, wanted: &[String]) -> bool {
    wanted.iter().all(|want| {
        let want = want.to_lowercase();
        student
            .skills
            .iter()
            .any(|skill| skill.to_lowercase() == want)
    })
}

/// Records with an absent graduation year never match a specific year.
fn matches_graduation_year(student: &Student, year: Option<i32>) -> bool {
    match year {
        None => true,
        Some(want) => student.graduation_year == Some(want),
    }
}

/// Records with an absent GPA never match a positive threshold. A threshold
/// of zero is no constraint, mirroring the original service.
fn matches_gpa(student: &Student, min_gpa: Option<f64>) -> bool {
    match min_gpa {
        None => true,
        Some(min) => match student.gpa {
            Some(gpa) => gpa >= min,
            None => min <= 0.0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::student::RawStudent;
    use crate::students::normalize::normalize;

    /// The two-record scenario from the service's reference data: one
    /// current-shape record, one legacy-shape record.
    fn fixture_roster() -> Vec<Student> {
        let ann: RawStudent = serde_json::from_value(serde_json::json!({
            "id": 1,
            "first_name": "Ann",
            "last_name": "Lee",
            "education": {
                "university": "MIT",
                "major": "CS",
                "gpa": 3.8,
                "graduation_date": "2025-06-01"
            },
            "skills": ["Python", "Go"]
        }))
        .unwrap();
        let bo: RawStudent = serde_json::from_value(serde_json::json!({
            "id": 2,
            "first_name": "Bo",
            "last_name": "Kim",
            "University": "NYU",
            "Major": "Art",
            "GPA": 2.9,
            "Graduation Date": "2024-05-01",
            "skills": ["Figma"]
        }))
        .unwrap();
        vec![normalize(&ann), normalize(&bo)]
    }

    fn ids(students: &[Student]) -> Vec<i64> {
        students.iter().map(|s| s.id).collect()
    }

    #[test]
    fn test_no_criteria_returns_everything() {
        let roster = fixture_roster();
        assert_eq!(filter(&roster, &Criteria::default()).len(), roster.len());
    }

    #[test]
    fn test_gpa_floor_returns_exactly_the_qualifying_subset() {
        let roster = fixture_roster();
        let criteria = Criteria {
            min_gpa: Some(3.0),
            ..Criteria::default()
        };
        assert_eq!(ids(&filter(&roster, &criteria)), vec![1]);
    }

    #[test]
    fn test_absent_gpa_never_matches_positive_threshold() {
        let mut roster = fixture_roster();
        roster[0].gpa = None;
        let criteria = Criteria {
            min_gpa: Some(0.1),
            ..Criteria::default()
        };
        assert_eq!(ids(&filter(&roster, &criteria)), vec![2]);
    }

    #[test]
    fn test_zero_gpa_threshold_is_no_constraint() {
        let mut roster = fixture_roster();
        roster[0].gpa = None;
        let criteria = Criteria {
            min_gpa: Some(0.0),
            ..Criteria::default()
        };
        assert_eq!(filter(&roster, &criteria).len(), 2);
    }

    #[test]
    fn test_major_filter_is_exact_case_insensitive() {
        let roster = fixture_roster();
        let criteria = Criteria {
            major: Some("art".into()),
            ..Criteria::default()
        };
        assert_eq!(ids(&filter(&roster, &criteria)), vec![2]);
    }

    #[test]
    fn test_major_filter_rejects_partial_matches() {
        let roster = fixture_roster();
        // "CS" must not be matched by a containing or contained term.
        for term in ["C", "CSX"] {
            let criteria = Criteria {
                major: Some(term.into()),
                ..Criteria::default()
            };
            assert!(filter(&roster, &criteria).is_empty(), "term {term:?}");
        }
    }

    #[test]
    fn test_skill_filter_is_case_insensitive_equality() {
        let roster = fixture_roster();
        let criteria = Criteria {
            skills: vec!["python".into()],
            ..Criteria::default()
        };
        assert_eq!(ids(&filter(&roster, &criteria)), vec![1]);
    }

    #[test]
    fn test_all_requested_skills_must_be_present() {
        let roster = fixture_roster();
        let criteria = Criteria {
            skills: vec!["Python".into(), "Figma".into()],
            ..Criteria::default()
        };
        assert!(filter(&roster, &criteria).is_empty());
    }

    #[test]
    fn test_graduation_year_exact_match() {
        let roster = fixture_roster();
        let criteria = Criteria {
            graduation_year: Some(2024),
            ..Criteria::default()
        };
        assert_eq!(ids(&filter(&roster, &criteria)), vec![2]);
    }

    #[test]
    fn test_absent_graduation_year_never_matches() {
        let mut roster = fixture_roster();
        roster[0].graduation_year = None;
        let criteria = Criteria {
            graduation_year: Some(2025),
            ..Criteria::default()
        };
        assert!(filter(&roster, &criteria).is_empty());
    }

    #[test]
    fn test_search_matches_last_name() {
        let roster = fixture_roster();
        let criteria = Criteria {
            search: Some("lee".into()),
            ..Criteria::default()
        };
        assert_eq!(ids(&filter(&roster, &criteria)), vec![1]);
    }

    #[test]
    fn test_search_matches_reversed_name() {
        let roster = fixture_roster();
        let criteria = Criteria {
            search: Some("kim bo".into()),
            ..Criteria::default()
        };
        assert_eq!(ids(&filter(&roster, &criteria)), vec![2]);
    }

    #[test]
    fn test_search_matches_skill() {
        let roster = fixture_roster();
        let criteria = Criteria {
            search: Some("python".into()),
            ..Criteria::default()
        };
        assert_eq!(ids(&filter(&roster, &criteria)), vec![1]);
    }

    #[test]
    fn test_search_matches_university() {
        let roster = fixture_roster();
        let criteria = Criteria {
            search: Some("nyu".into()),
            ..Criteria::default()
        };
        assert_eq!(ids(&filter(&roster, &criteria)), vec![2]);
    }

    #[test]
    fn test_university_filter_is_substring() {
        let roster = fixture_roster();
        let criteria = Criteria {
            university: Some("mi".into()),
            ..Criteria::default()
        };
        assert_eq!(ids(&filter(&roster, &criteria)), vec![1]);
    }

    #[test]
    fn test_criteria_are_conjunctive() {
        let roster = fixture_roster();
        let criteria = Criteria {
            search: Some("lee".into()),
            major: Some("Art".into()),
            ..Criteria::default()
        };
        assert!(filter(&roster, &criteria).is_empty());
    }
}
