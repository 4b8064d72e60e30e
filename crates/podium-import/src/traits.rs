//! Collaborator seams of the import orchestrator.

use podium_model::{Entry, EventId, Placement};

use crate::error::{EntryLookupError, StoreError};

/// Resolves an external event reference to an internal event.
///
/// Must be a pure read. `None` means the reference is unknown; the
/// orchestrator records that group as failed and moves on.
pub trait EventResolver {
    fn lookup(&self, event_key: &str) -> Option<EventId>;
}

impl<F> EventResolver for F
where
    F: Fn(&str) -> Option<EventId>,
{
    fn lookup(&self, event_key: &str) -> Option<EventId> {
        self(event_key)
    }
}

/// Persists the full placement list of one event.
///
/// `persist` replaces whatever was stored for `event_id` and must apply the
/// list all-or-nothing. Placements arrive sorted by place. Retries, if any,
/// belong here rather than in the orchestrator.
pub trait PlacementStore {
    fn persist(&mut self, event_id: &EventId, placements: &[Placement]) -> Result<(), StoreError>;
}

impl<F> PlacementStore for F
where
    F: FnMut(&EventId, &[Placement]) -> Result<(), StoreError>,
{
    fn persist(&mut self, event_id: &EventId, placements: &[Placement]) -> Result<(), StoreError> {
        self(event_id, placements)
    }
}

/// Matches athlete names on a leaderboard to stable entries of an event.
pub trait EntryDirectory {
    fn find_entry(&self, event_id: &EventId, name: &str) -> Result<Entry, EntryLookupError>;
}
