//! Decoded rows and validated event groups.

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// Lowest rank a placement may carry.
pub const MIN_PLACE: u32 = 1;

/// Highest rank a placement may carry.
pub const MAX_PLACE: u32 = 10;

/// Number of ranked names in a global leaderboard row.
pub const LEADERBOARD_SIZE: usize = MAX_PLACE as usize;

/// A stable athlete, team or country identity within one event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    pub entry_key: String,
    pub entry_name: String,
}

impl Entry {
    pub fn new(entry_key: impl Into<String>, entry_name: impl Into<String>) -> Self {
        Self {
            entry_key: entry_key.into(),
            entry_name: entry_name.into(),
        }
    }
}

/// One ranked entry, as handed to a placement store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub place: u32,
    pub entry_key: String,
    pub entry_name: String,
}

impl Placement {
    /// Build a placement, rejecting ranks outside `MIN_PLACE..=MAX_PLACE`.
    pub fn new(place: u32, entry: Entry) -> Result<Self, ModelError> {
        if !(MIN_PLACE..=MAX_PLACE).contains(&place) {
            return Err(ModelError::PlaceOutOfRange(i64::from(place)));
        }
        Ok(Self {
            place,
            entry_key: entry.entry_key,
            entry_name: entry.entry_name,
        })
    }
}

/// A decoded row of the placement schema (one row per event and rank).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementRow {
    /// 1-based line on which the row starts in the source text.
    pub line: usize,
    pub event_key: String,
    pub place: u32,
    pub entry_key: String,
    pub entry_name: String,
}

impl PlacementRow {
    pub fn placement(&self) -> Placement {
        Placement {
            place: self.place,
            entry_key: self.entry_key.clone(),
            entry_name: self.entry_name.clone(),
        }
    }
}

/// A decoded row of the global leaderboard schema (one row per event).
///
/// Names are in rank order: `leaderboard[0]` finished first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardRow {
    /// 1-based line on which the row starts in the source text.
    pub line: usize,
    pub event_ref: String,
    pub leaderboard: [String; LEADERBOARD_SIZE],
}

impl LeaderboardRow {
    /// Names paired with their 1-based place.
    pub fn ranked(&self) -> impl Iterator<Item = (u32, &str)> {
        (MIN_PLACE..).zip(self.leaderboard.iter().map(String::as_str))
    }
}

/// All placements sharing one `event_key`, sorted ascending by place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventGroup {
    pub event_key: String,
    pub placements: Vec<Placement>,
}

impl EventGroup {
    /// Build a group and put its placements in rank order.
    pub fn new(event_key: impl Into<String>, mut placements: Vec<Placement>) -> Self {
        placements.sort_by_key(|p| p.place);
        Self {
            event_key: event_key.into(),
            placements,
        }
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}
