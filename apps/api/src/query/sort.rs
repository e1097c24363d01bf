//! Sort orders for the filtered result set.

use std::cmp::Ordering;

use crate::models::student::Student;

/// Requested sort order. Anything unrecognised in the query string falls
/// back to the default order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Full name, ascending, case-insensitive.
    Name,
    /// Major, ascending, case-insensitive.
    Major,
    /// GPA descending; records without a GPA sort last.
    Gpa,
}

impl SortKey {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "name" => Some(SortKey::Name),
            "major" => Some(SortKey::Major),
            "gpa" => Some(SortKey::Gpa),
            _ => None,
        }
    }
}

/// Sorts in place. With no explicit key the order is ascending by the
/// first-name initial, stable for ties — the order the directory UI has
/// always shown.
pub fn sort_students(students: &mut [Student], key: Option<SortKey>) {
    match key {
        Some(SortKey::Name) => {
            students.sort_by_cached_key(|s| s.name.to_lowercase());
        }
        Some(SortKey::Major) => {
            students.sort_by_cached_key(|s| s.major.to_lowercase());
        }
        Some(SortKey::Gpa) => {
            students.sort_by(|a, b| match (a.gpa, b.gpa) {
                (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            });
        }
        None => {
            students.sort_by_key(|s| {
                s.name
                    .chars()
                    .next()
                    .map(|c| c.to_lowercase().next().unwrap_or(c))
            });
        }
    }
}
