//! Raw and canonical student record types.
//!
//! The data file contains two mutually exclusive field-naming conventions:
//! a legacy flat shape with capitalised keys (`University`, `Major`, `GPA`,
//! `"Graduation Date"`) and a current shape with a nested `education` object.
//! `RawStudent` deserializes both; [`RawStudent::education_fields`] is the
//! single point that decides which shape a record is, so no other module
//! ever looks at the legacy keys directly.

use serde::{Deserialize, Serialize};

/// The nested education object of current-shape records. Also carried
/// verbatim on the canonical [`Student`] because some consumers read
/// `education.graduation_date` instead of the derived year.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub university: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graduation_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_degree: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minor: Option<String>,
}

/// `projects[].technologies` appears in the wild as either an array of
/// strings or a single pre-joined string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Technologies {
    List(Vec<String>),
    Joined(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawProject {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub technologies: Option<Technologies>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

/// One student as it appears in the data file, either shape.
///
/// `id` is the only required field; everything else defaults so that a
/// partially filled record still loads. Records that fail to deserialize at
/// all (null, missing `id`) are skipped by the roster loader.
#[derive(Debug, Clone, Deserialize)]
pub struct RawStudent {
    pub id: i64,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    /// Pre-joined full name. Only present on records that already went
    /// through normalization; used as a fallback when the split fields are
    /// missing so that re-normalizing canonical output is lossless.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub projects: Vec<RawProject>,
    #[serde(default)]
    pub education: Option<Education>,
    /// Flat lowercase fields. Genuine source records never carry these; they
    /// appear when an already-canonical record is fed back through the
    /// normalizer, and serve as secondary fallbacks so that round trip is
    /// lossless.
    #[serde(default)]
    pub university: Option<String>,
    #[serde(default)]
    pub major: Option<String>,
    #[serde(default)]
    pub gpa: Option<f64>,
    #[serde(default, rename = "graduationDate")]
    pub graduation_date: Option<String>,
    #[serde(default, rename = "University")]
    pub legacy_university: Option<String>,
    #[serde(default, rename = "Major")]
    pub legacy_major: Option<String>,
    #[serde(default, rename = "GPA")]
    pub legacy_gpa: Option<f64>,
    #[serde(default, rename = "Graduation Date")]
    pub legacy_graduation_date: Option<String>,
}

/// Tagged view over the two shape families. Produced once per record; the
/// normalizer matches on this instead of chaining field fallbacks.
#[derive(Debug)]
pub enum EducationFields<'a> {
    Current(&'a Education),
    Legacy {
        university: Option<&'a str>,
        major: Option<&'a str>,
        gpa: Option<f64>,
        graduation_date: Option<&'a str>,
    },
}

impl RawStudent {
    /// Shape detection: a non-null `education` object makes the record
    /// current-shape and takes precedence over any legacy top-level fields.
    pub fn education_fields(&self) -> EducationFields<'_> {
        match &self.education {
            Some(education) => EducationFields::Current(education),
            None => EducationFields::Legacy {
                university: self.legacy_university.as_deref(),
                major: self.legacy_major.as_deref(),
                gpa: self.legacy_gpa,
                graduation_date: self.legacy_graduation_date.as_deref(),
            },
        }
    }
}

/// A normalized project: `technologies` is always a single display string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub technologies: String,
    pub link: String,
}

/// The canonical student record used by every read path.
///
/// Normalization is additive for the graduation-date fields: alongside the
/// derived `graduationYear`, the record carries the `education` sub-object
/// (synthesized for legacy records), the resolved `graduationDate`, and the
/// verbatim legacy `"Graduation Date"` key, so consumers expecting either
/// convention keep working.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub university: String,
    pub major: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<f64>,
    #[serde(rename = "graduationYear")]
    pub graduation_year: Option<i32>,
    pub education: Education,
    #[serde(
        rename = "Graduation Date",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub legacy_graduation_date: Option<String>,
    #[serde(rename = "graduationDate")]
    pub graduation_date: Option<String>,
    pub skills: Vec<String>,
    pub github: String,
    pub linkedin: String,
    pub projects: Vec<Project>,
}
