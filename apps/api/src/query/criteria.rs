//! Immutable filter criteria for one query.
//!
//! Built leniently from the raw query-string map: a numeric value that fails
//! to parse is treated as if the criterion were omitted, never as a request
//! error. The criteria value is owned by the caller and passed into the
//! engine per query — there is no ambient "current filter" state.

use std::collections::HashMap;

use crate::query::sort::SortKey;

#[derive(Debug, Clone, Default)]
pub struct Criteria {
    /// Substring match against full name, reversed name, university, or any
    /// skill.
    pub search: Option<String>,
    /// Substring match against university only.
    pub university: Option<String>,
    /// Exact case-insensitive match.
    pub major: Option<String>,
    /// Every requested skill must be present (AND).
    pub skills: Vec<String>,
    /// Exact match against the derived graduation year.
    pub graduation_year: Option<i32>,
    /// Minimum GPA (inclusive).
    pub min_gpa: Option<f64>,
    pub sort: Option<SortKey>,
    /// 1-indexed page. When absent the full result set is returned.
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

impl Criteria {
    /// Parses criteria from query parameters. Empty and whitespace-only
    /// values count as omitted.
    pub fn from_query(params: &HashMap<String, String>) -> Self {
        let text = |key: &str| {
            params
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        Criteria {
            search: text("search"),
            university: text("university"),
            major: text("major"),
            skills: params
                .get("skills")
                .map(|raw| {
                    raw.split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
            graduation_year: text("graduationYear").and_then(|v| v.parse().ok()),
            min_gpa: text("gpa").and_then(|v| v.parse().ok()),
            sort: text("sort").and_then(|v| SortKey::parse(&v)),
            page: text("page").and_then(|v| v.parse().ok()),
            per_page: text("perPage").and_then(|v| v.parse().ok()),
        }
    }

    /// True when no filter constraint is set (sort and paging do not count).
    pub fn is_unconstrained(&self) -> bool {
        self.search.is_none()
            && self.university.is_none()
            && self.major.is_none()
            && self.skills.is_empty()
            && self.graduation_year.is_none()
            && self.min_gpa.is_none()
    }
}
