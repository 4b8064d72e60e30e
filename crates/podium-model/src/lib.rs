//! Data model shared by the podium crates.
//!
//! Records flow through the pipeline in this order:
//!
//! - [`PlacementRow`] / [`LeaderboardRow`]: one decoded input row
//! - [`EventGroup`]: validated placements for one event
//! - [`ImportLog`]: per-event outcome of an import attempt

pub mod error;
pub mod ids;
pub mod outcome;
pub mod records;

pub use error::{ModelError, Result};
pub use ids::EventId;
pub use outcome::{ImportLog, ImportOutcome};
pub use records::{
    Entry, EventGroup, LEADERBOARD_SIZE, LeaderboardRow, MAX_PLACE, MIN_PLACE, Placement,
    PlacementRow,
};
