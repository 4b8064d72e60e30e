//! Error types for importing results.

use std::path::PathBuf;

use thiserror::Error;

use podium_model::EventId;

/// Result type for placement store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// A placement store could not persist one event's placements.
#[derive(Debug, Error)]
pub enum StoreError {
    /// File I/O error.
    #[error("failed to {operation} {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stored results could not be encoded or decoded.
    #[error("failed to serialize results for event {event_id}: {source}")]
    Serialization {
        event_id: EventId,
        #[source]
        source: serde_json::Error,
    },

    /// The store refused the placements.
    #[error("{0}")]
    Rejected(String),
}

/// An athlete name could not be matched to a single entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryLookupError {
    #[error("athlete name '{name}' not found for event {event_id}")]
    NotFound { event_id: EventId, name: String },

    #[error("athlete name '{name}' is ambiguous for event {event_id} ({matches} matches)")]
    Ambiguous {
        event_id: EventId,
        name: String,
        matches: usize,
    },
}

/// An event catalog could not be loaded.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Failed to read the catalog file.
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog file is not a JSON event list.
    #[error("failed to parse catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An event has a blank `event_key` or id.
    #[error("catalog event #{index} has a blank event_key or id")]
    BlankEvent { index: usize },

    /// Two events share an `event_key`.
    #[error("duplicate event_key '{event_key}' in catalog")]
    DuplicateEventKey { event_key: String },

    /// Two events share an id.
    #[error("duplicate event id '{id}' in catalog")]
    DuplicateId { id: String },

    /// One event's id is another event's `event_key`.
    #[error("'{value}' is both an event id and the event_key of another event in catalog")]
    IdKeyClash { value: String },
}
