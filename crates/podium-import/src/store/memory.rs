use std::collections::BTreeMap;

use podium_model::{EventId, Placement};

use crate::error::StoreError;
use crate::traits::PlacementStore;

/// In-memory store, used for dry runs and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    results: BTreeMap<EventId, Vec<Placement>>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Placements currently stored for an event.
    pub fn get(&self, event_id: &EventId) -> Option<&[Placement]> {
        self.results.get(event_id).map(Vec::as_slice)
    }

    /// Number of successful `persist` calls, including replacements.
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&EventId, &[Placement])> {
        self.results.iter().map(|(id, p)| (id, p.as_slice()))
    }
}

impl PlacementStore for MemoryStore {
    fn persist(&mut self, event_id: &EventId, placements: &[Placement]) -> Result<(), StoreError> {
        self.results.insert(event_id.clone(), placements.to_vec());
        self.writes += 1;
        Ok(())
    }
}
