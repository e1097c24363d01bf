//! Data-source collaborator: loads the static student roster at startup.
//!
//! The file may be a bare JSON array of records or an object with a
//! top-level `students` array. An unreadable or syntactically invalid file
//! is a fatal startup error; a single malformed record is skipped with a
//! warning so that one bad entry never takes down the rest of the roster.

use anyhow::{bail, Context, Result};
use serde_json::Value;
use tracing::{info, warn};

use crate::models::student::{RawStudent, Student};
use crate::students::normalize::normalize;

/// Reads, parses, and normalizes the roster file.
pub fn load_roster(path: &str) -> Result<Vec<Student>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read roster file '{path}'"))?;
    let root: Value = serde_json::from_str(&text)
        .with_context(|| format!("roster file '{path}' is not valid JSON"))?;
    let roster = normalize_entries(&root)?;
    info!(count = roster.len(), "student roster loaded from {path}");
    Ok(roster)
}

fn normalize_entries(root: &Value) -> Result<Vec<Student>> {
    let entries = match root {
        Value::Array(items) => items,
        Value::Object(map) => match map.get("students").and_then(Value::as_array) {
            Some(items) => items,
            None => bail!("roster object has no top-level 'students' array"),
        },
        _ => bail!("roster must be a JSON array or an object with a 'students' array"),
    };

    let mut roster = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        match serde_json::from_value::<RawStudent>(entry.clone()) {
            Ok(raw) => roster.push(normalize(&raw)),
            Err(e) => warn!(index, error = %e, "skipping malformed student record"),
        }
    }
    Ok(roster)
}
