//! Normalizer — converts one raw student record (either shape) into the
//! canonical shape used by every downstream consumer.
//!
//! Shape detection happens exactly once per record, via
//! [`RawStudent::education_fields`]. Field resolution order per attribute:
//! shape-resolved field → flat canonical field (only present on
//! re-normalized input) → default. Graduation-year derivation is total: a
//! missing or unparsable date yields `None`, never a default year.

use chrono::{DateTime, Datelike, NaiveDate};

use crate::models::student::{
    Education, EducationFields, Project, RawProject, RawStudent, Student, Technologies,
};

/// Builds the canonical record for one raw student.
///
/// Idempotent: feeding canonical output back through this function returns
/// an equal record. Side-effect free.
pub fn normalize(raw: &RawStudent) -> Student {
    let shape = raw.education_fields();

    let (edu_university, edu_major, edu_gpa, edu_grad_date) = match &shape {
        EducationFields::Current(ed) => (
            ed.university.as_deref(),
            ed.major.as_deref(),
            ed.gpa,
            ed.graduation_date.as_deref(),
        ),
        EducationFields::Legacy {
            university,
            major,
            gpa,
            graduation_date,
        } => (*university, *major, *gpa, *graduation_date),
    };

    let graduation_date = edu_grad_date
        .or(raw.graduation_date.as_deref())
        .map(str::to_string);

    // The education sub-object is preserved verbatim for current-shape
    // records and synthesized (date only) for legacy ones, matching what
    // consumers of `education.graduation_date` expect.
    let education = match &shape {
        EducationFields::Current(ed) => (*ed).clone(),
        EducationFields::Legacy {
            graduation_date, ..
        } => Education {
            graduation_date: graduation_date.map(str::to_string),
            ..Education::default()
        },
    };

    Student {
        id: raw.id,
        name: full_name(raw),
        email: raw.email.clone().unwrap_or_default(),
        phone: raw.phone.clone().unwrap_or_default(),
        university: edu_university
            .or(raw.university.as_deref())
            .unwrap_or_default()
            .to_string(),
        major: edu_major
            .or(raw.major.as_deref())
            .unwrap_or_default()
            .to_string(),
        gpa: edu_gpa.or(raw.gpa),
        graduation_year: graduation_date.as_deref().and_then(year_of),
        education,
        legacy_graduation_date: raw.legacy_graduation_date.clone(),
        graduation_date,
        skills: raw.skills.clone(),
        github: raw.github.clone().unwrap_or_default(),
        linkedin: raw.linkedin.clone().unwrap_or_default(),
        projects: raw.projects.iter().map(normalize_project).collect(),
    }
}

/// `first_name + " " + last_name`, falling back to a pre-joined `name`
/// field when the split fields are absent.
fn full_name(raw: &RawStudent) -> String {
    let joined = format!(
        "{} {}",
        raw.first_name.as_deref().unwrap_or(""),
        raw.last_name.as_deref().unwrap_or("")
    );
    let joined = joined.trim();
    if joined.is_empty() {
        raw.name.clone().unwrap_or_default()
    } else {
        joined.to_string()
    }
}

fn normalize_project(raw: &RawProject) -> Project {
    Project {
        title: raw.title.clone().unwrap_or_default(),
        description: raw.description.clone().unwrap_or_default(),
        technologies: match &raw.technologies {
            Some(Technologies::List(items)) => items.join(", "),
            Some(Technologies::Joined(s)) => s.clone(),
            None => String::new(),
        },
        link: raw
            .github
            .clone()
            .or_else(|| raw.link.clone())
            .unwrap_or_default(),
    }
}

/// Extracts the 4-digit year from a graduation date string.
///
/// Tries RFC 3339 and the date formats observed in the data file, then falls
/// back to scanning for a plausible bare year ("May 2025"). Returns `None`
/// on anything unparsable.
pub fn year_of(date: &str) -> Option<i32> {
    let date = date.trim();
    if date.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(date) {
        return Some(dt.year());
    }
    for format in ["%Y-%m-%d", "%m/%d/%Y", "%B %d, %Y", "%b %d, %Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(date, format) {
            return Some(d.year());
        }
    }
    date.split(|c: char| !c.is_ascii_digit())
        .filter(|token| token.len() == 4)
        .filter_map(|token| token.parse::<i32>().ok())
        .find(|year| (1900..=2100).contains(year))
}
