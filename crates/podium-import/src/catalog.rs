//! Event catalog: the events results can be imported into.
//!
//! Loaded from a JSON list shaped like the event seed file:
//!
//! ```json
//! [
//!   {
//!     "id": "3f0c...",
//!     "sport": "Alpine Skiing",
//!     "name": "Men's Downhill",
//!     "event_key": "alpine_skiing_mens_downhill",
//!     "is_team_event": false,
//!     "sort_order": 1,
//!     "entries": [{ "entry_key": "ath:1", "entry_name": "Alice" }]
//!   }
//! ]
//! ```
//!
//! `id` defaults to `event_key`; `entries` are only needed for leaderboard
//! imports.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use podium_model::{Entry, EventId};

use crate::error::{CatalogError, EntryLookupError};
use crate::traits::{EntryDirectory, EventResolver};

/// One event as listed in the catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub sport: String,
    #[serde(default)]
    pub name: String,
    pub event_key: String,
    #[serde(default)]
    pub is_team_event: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entries: Vec<Entry>,
}

impl CatalogEvent {
    pub fn new(event_key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: None,
            sport: String::new(),
            name: name.into(),
            event_key: event_key.into(),
            is_team_event: false,
            sort_order: None,
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_entries(mut self, entries: Vec<Entry>) -> Self {
        self.entries = entries;
        self
    }

    /// Internal id, falling back to the event key.
    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.event_key)
    }
}

/// Why a reference did not resolve to exactly one event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("blank event reference")]
    Blank,
    #[error("event not found for reference '{0}'")]
    NotFound(String),
    #[error("event name is ambiguous: '{reference}' matches {matches} events")]
    Ambiguous { reference: String, matches: usize },
}

/// Indexed, duplicate-free set of events.
#[derive(Debug, Clone, Default)]
pub struct EventCatalog {
    events: Vec<CatalogEvent>,
    ids: Vec<EventId>,
    by_id: HashMap<String, usize>,
    by_key: HashMap<String, usize>,
}

impl EventCatalog {
    /// Build a catalog, rejecting blank and duplicate keys or ids.
    pub fn from_events(events: Vec<CatalogEvent>) -> Result<Self, CatalogError> {
        let mut catalog = Self::default();

        for (index, mut event) in events.into_iter().enumerate() {
            event.event_key = event.event_key.trim().to_string();
            if event.event_key.is_empty() {
                return Err(CatalogError::BlankEvent { index });
            }
            let id = EventId::new(event.id()).map_err(|_| CatalogError::BlankEvent { index })?;

            if catalog.by_key.contains_key(&event.event_key) {
                return Err(CatalogError::DuplicateEventKey {
                    event_key: event.event_key,
                });
            }
            if catalog.by_id.contains_key(id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: id.to_string(),
                });
            }
            // Ids are looked up before keys, so a shared value would hide one event.
            if catalog.by_key.contains_key(id.as_str()) {
                return Err(CatalogError::IdKeyClash {
                    value: id.to_string(),
                });
            }
            if catalog.by_id.contains_key(&event.event_key) {
                return Err(CatalogError::IdKeyClash {
                    value: event.event_key,
                });
            }

            let slot = catalog.events.len();
            catalog.by_key.insert(event.event_key.clone(), slot);
            catalog.by_id.insert(id.to_string(), slot);
            catalog.ids.push(id);
            catalog.events.push(event);
        }

        tracing::debug!(events = catalog.events.len(), "event catalog built");
        Ok(catalog)
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let events: Vec<CatalogEvent> =
            serde_json::from_str(&text).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_events(events)
    }

    /// Resolve a reference by id, then `event_key`, then unique name
    /// (ignoring case).
    pub fn resolve(&self, reference: &str) -> Result<EventId, ResolveError> {
        let reference = reference.trim();
        if reference.is_empty() {
            return Err(ResolveError::Blank);
        }

        if let Some(&slot) = self.by_id.get(reference).or_else(|| self.by_key.get(reference)) {
            return Ok(self.ids[slot].clone());
        }

        let wanted = reference.to_lowercase();
        let matches: Vec<usize> = self
            .events
            .iter()
            .enumerate()
            .filter(|(_, event)| event.name.trim().to_lowercase() == wanted)
            .map(|(slot, _)| slot)
            .collect();

        match matches.as_slice() {
            [slot] => Ok(self.ids[*slot].clone()),
            [] => Err(ResolveError::NotFound(reference.to_string())),
            _ => Err(ResolveError::Ambiguous {
                reference: reference.to_string(),
                matches: matches.len(),
            }),
        }
    }

    /// Event with the given internal id.
    pub fn event(&self, id: &EventId) -> Option<&CatalogEvent> {
        self.by_id.get(id.as_str()).map(|&slot| &self.events[slot])
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventResolver for EventCatalog {
    fn lookup(&self, event_key: &str) -> Option<EventId> {
        match self.resolve(event_key) {
            Ok(id) => Some(id),
            Err(error @ ResolveError::Ambiguous { .. }) => {
                tracing::warn!(%error, "treating ambiguous event reference as unresolved");
                None
            }
            Err(_) => None,
        }
    }
}

impl EntryDirectory for EventCatalog {
    fn find_entry(&self, event_id: &EventId, name: &str) -> Result<Entry, EntryLookupError> {
        let name = name.trim();
        let not_found = || EntryLookupError::NotFound {
            event_id: event_id.clone(),
            name: name.to_string(),
        };

        let event = self.event(event_id).ok_or_else(not_found)?;
        let wanted = name.to_lowercase();
        let matches: Vec<&Entry> = event
            .entries
            .iter()
            .filter(|entry| entry.entry_name.trim().to_lowercase() == wanted)
            .collect();

        match matches.as_slice() {
            [entry] => Ok((*entry).clone()),
            [] => Err(not_found()),
            _ => Err(EntryLookupError::Ambiguous {
                event_id: event_id.clone(),
                name: name.to_string(),
                matches: matches.len(),
            }),
        }
    }
}
