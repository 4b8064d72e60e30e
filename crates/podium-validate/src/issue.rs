//! Group validation issues.
//!
//! Each variant carries only the data its message needs.

use serde::{Deserialize, Serialize};

/// A rule violation inside one event group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Issue {
    /// The same place appears on more than one row.
    DuplicatePlace { place: u32, lines: Vec<usize> },
    /// Places do not run from 1 to the highest place without gaps.
    NonContiguousPlaces { missing: Vec<u32> },
    /// The same entry appears on more than one row.
    DuplicateEntryKey { entry_key: String, lines: Vec<usize> },
}

impl Issue {
    /// Short rule code, stable across releases.
    pub fn code(&self) -> &'static str {
        match self {
            Issue::DuplicatePlace { .. } => "duplicate_place",
            Issue::NonContiguousPlaces { .. } => "non_contiguous_places",
            Issue::DuplicateEntryKey { .. } => "duplicate_entry_key",
        }
    }

    /// First source line involved, if any.
    pub fn first_line(&self) -> Option<usize> {
        match self {
            Issue::DuplicatePlace { lines, .. } | Issue::DuplicateEntryKey { lines, .. } => {
                lines.first().copied()
            }
            Issue::NonContiguousPlaces { .. } => None,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Issue::DuplicatePlace { place, lines } => format!(
                "duplicate place values: place {place} on lines {}",
                join(lines)
            ),
            Issue::NonContiguousPlaces { missing } => format!(
                "places must be contiguous from 1: missing {}",
                join(missing)
            ),
            Issue::DuplicateEntryKey { entry_key, lines } => format!(
                "duplicate entry_key values: '{entry_key}' on lines {}",
                join(lines)
            ),
        }
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}

fn join<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
