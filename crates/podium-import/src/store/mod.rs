//! Placement stores.
//!
//! Both stores replace the full placement list of an event on every write.

mod directory;
mod memory;

pub use directory::{DirectoryStore, StoredResults};
pub use memory::MemoryStore;
