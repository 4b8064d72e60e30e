//! Result import orchestration.
//!
//! Validated event groups are imported one at a time, in ascending
//! `event_key` order. Each group is first resolved to an internal event, then
//! handed to a [`PlacementStore`] as one all-or-nothing unit. A group that
//! cannot be resolved or stored is recorded as failed and the batch carries on.
//!
//! # Collaborators
//!
//! - [`EventResolver`]: external reference → internal [`EventId`]
//! - [`PlacementStore`]: replaces the stored placements of one event
//! - [`EntryDirectory`]: athlete name → stable entry (leaderboard sheets)
//!
//! [`EventCatalog`] implements the first and last from a JSON event list;
//! [`MemoryStore`] and [`DirectoryStore`] implement the store.
//!
//! [`EventId`]: podium_model::EventId

mod catalog;
mod error;
mod orchestrator;
mod report;
mod store;
mod traits;

pub use catalog::{CatalogEvent, EventCatalog, ResolveError};
pub use error::{CatalogError, EntryLookupError, Result, StoreError};
pub use orchestrator::{REFERENCE_NOT_FOUND, import_groups, import_leaderboards};
pub use report::{ImportReport, source_fingerprint};
pub use store::{DirectoryStore, MemoryStore, StoredResults};
pub use traits::{EntryDirectory, EventResolver, PlacementStore};
