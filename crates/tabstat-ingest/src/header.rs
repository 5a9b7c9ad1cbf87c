//! Header normalisation
//!
//! Placeholder names (empty, or the `Unnamed` prefix left behind by
//! spreadsheet exports with malformed headers) mark columns to drop. Columns
//! are dropped by name only, never by content. Repeated names get `.1`, `.2`
//! suffixes in order of appearance.

use std::collections::HashSet;

const PLACEHOLDER_PREFIX: &str = "Unnamed";

/// True for auto-generated header names
pub fn is_placeholder(name: &str) -> bool {
    name.trim().is_empty() || name.starts_with(PLACEHOLDER_PREFIX)
}

/// Final name for every raw header, `None` where the column is dropped
pub fn normalize_headers(raw: &[String]) -> Vec<Option<String>> {
    let mut taken: HashSet<String> = HashSet::with_capacity(raw.len());
    raw.iter()
        .map(|name| {
            if is_placeholder(name) {
                return None;
            }
            let mut candidate = name.clone();
            let mut suffix = 1;
            while taken.contains(&candidate) {
                candidate = format!("{name}.{suffix}");
                suffix += 1;
            }
            taken.insert(candidate.clone());
            Some(candidate)
        })
        .collect()
}
