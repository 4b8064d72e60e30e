//! Header alias resolution.
//!
//! Each logical field has an ordered list of accepted header spellings.
//! Header cells are trimmed and lower-cased before comparison, and the first
//! alias found anywhere in the header wins, regardless of column position.

use podium_model::LEADERBOARD_SIZE;

use crate::error::SchemaError;

/// A logical field and the header spellings that identify it, by priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec<'a> {
    pub name: &'a str,
    pub aliases: &'a [&'a str],
}

impl<'a> FieldSpec<'a> {
    pub const fn new(name: &'a str, aliases: &'a [&'a str]) -> Self {
        Self { name, aliases }
    }
}

/// Leaderboard sheet: the event reference, then places 1 through 10.
pub const LEADERBOARD_FIELDS: [FieldSpec<'static>; LEADERBOARD_SIZE + 1] = [
    FieldSpec::new(
        "event_ref",
        &["event_ref", "event_id", "event_key", "event_name"],
    ),
    FieldSpec::new("place_1", &["first", "place_1", "p1"]),
    FieldSpec::new("place_2", &["second", "place_2", "p2"]),
    FieldSpec::new("place_3", &["third", "place_3", "p3"]),
    FieldSpec::new("place_4", &["fourth", "place_4", "p4"]),
    FieldSpec::new("place_5", &["fifth", "place_5", "p5"]),
    FieldSpec::new("place_6", &["sixth", "place_6", "p6"]),
    FieldSpec::new("place_7", &["seventh", "place_7", "p7"]),
    FieldSpec::new("place_8", &["eighth", "place_8", "p8"]),
    FieldSpec::new("place_9", &["ninth", "place_9", "p9"]),
    FieldSpec::new("place_10", &["tenth", "place_10", "p10"]),
];

/// Placement sheet: canonical names only.
pub const PLACEMENT_FIELDS: [FieldSpec<'static>; 4] = [
    FieldSpec::new("event_key", &["event_key"]),
    FieldSpec::new("place", &["place"]),
    FieldSpec::new("entry_key", &["entry_key"]),
    FieldSpec::new("entry_name", &["entry_name"]),
];

/// Resolved logical field → column index mapping, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    columns: Vec<(String, usize)>,
}

impl ColumnMap {
    /// Column index of a logical field.
    pub fn get(&self, field: &str) -> Option<usize> {
        self.columns
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, index)| *index)
    }

    fn require(&self, field: &FieldSpec<'_>) -> Result<usize, SchemaError> {
        self.get(field.name)
            .ok_or_else(|| missing_field(field))
    }
}

/// Map every field in `fields` to a column of `header`.
///
/// Fails on the first field none of whose aliases appear in the header.
pub fn resolve(header: &[String], fields: &[FieldSpec<'_>]) -> Result<ColumnMap, SchemaError> {
    let normalized: Vec<String> = header.iter().map(String::as_str).map(normalize_header).collect();
    let mut columns = Vec::with_capacity(fields.len());

    for field in fields {
        let index = field.aliases.iter().find_map(|alias| {
            let alias = normalize_header(alias);
            normalized.iter().position(|cell| *cell == alias)
        });
        let Some(index) = index else {
            return Err(missing_field(field));
        };
        tracing::trace!(field = field.name, index, "resolved column");
        columns.push((field.name.to_string(), index));
    }

    Ok(ColumnMap { columns })
}

fn normalize_header(value: &str) -> String {
    value.trim().to_lowercase()
}

fn missing_field(field: &FieldSpec<'_>) -> SchemaError {
    SchemaError {
        missing_field: field.name.to_string(),
        accepted: field.aliases.iter().map(|a| (*a).to_string()).collect(),
    }
}

/// Column indices of a placement sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementColumns {
    pub event_key: usize,
    pub place: usize,
    pub entry_key: usize,
    pub entry_name: usize,
}

impl PlacementColumns {
    pub fn resolve(header: &[String]) -> Result<Self, SchemaError> {
        let map = resolve(header, &PLACEMENT_FIELDS)?;
        let [event_key, place, entry_key, entry_name] = &PLACEMENT_FIELDS;
        Ok(Self {
            event_key: map.require(event_key)?,
            place: map.require(place)?,
            entry_key: map.require(entry_key)?,
            entry_name: map.require(entry_name)?,
        })
    }
}

/// Column indices of a leaderboard sheet. `ranks[0]` is first place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaderboardColumns {
    pub event_ref: usize,
    pub ranks: [usize; LEADERBOARD_SIZE],
}

impl LeaderboardColumns {
    pub fn resolve(header: &[String]) -> Result<Self, SchemaError> {
        let map = resolve(header, &LEADERBOARD_FIELDS)?;
        let (event_field, rank_fields) = LEADERBOARD_FIELDS.split_at(1);

        let mut ranks = [0usize; LEADERBOARD_SIZE];
        for (slot, field) in ranks.iter_mut().zip(rank_fields) {
            *slot = map.require(field)?;
        }

        Ok(Self {
            event_ref: map.require(&event_field[0])?,
            ranks,
        })
    }
}
