//! Row decoding: typed records from tokenized rows.

use std::collections::HashMap;

use podium_model::{LEADERBOARD_SIZE, LeaderboardRow, MAX_PLACE, MIN_PLACE, PlacementRow};

use crate::csv::CsvRow;
use crate::error::RowError;
use crate::schema::{LeaderboardColumns, PlacementColumns};

/// Decode one placement sheet row.
///
/// All four fields must be non-empty after trimming and `place` must be an
/// integer in `1..=10`.
pub fn decode_placement_row(
    row: &CsvRow,
    columns: &PlacementColumns,
) -> Result<PlacementRow, RowError> {
    let event_key = required(row, columns.event_key, "event_key")?;
    let place_text = required(row, columns.place, "place")?;
    let entry_key = required(row, columns.entry_key, "entry_key")?;
    let entry_name = required(row, columns.entry_name, "entry_name")?;
    let place = parse_place(row.line, place_text)?;

    Ok(PlacementRow {
        line: row.line,
        event_key: event_key.to_string(),
        place,
        entry_key: entry_key.to_string(),
        entry_name: entry_name.to_string(),
    })
}

/// Decode one leaderboard sheet row.
///
/// The event reference and all ten names must be non-empty, and no two names
/// may be equal ignoring case.
pub fn decode_leaderboard_row(
    row: &CsvRow,
    columns: &LeaderboardColumns,
) -> Result<LeaderboardRow, RowError> {
    let event_ref = row.cell(columns.event_ref);
    if event_ref.is_empty() {
        return Err(RowError::new(row.line, "event reference is required"));
    }

    let mut seen: HashMap<String, usize> = HashMap::with_capacity(LEADERBOARD_SIZE);
    let mut names: [String; LEADERBOARD_SIZE] = Default::default();

    for (position, (slot, &index)) in names.iter_mut().zip(&columns.ranks).enumerate() {
        let place = position + 1;
        let name = row.cell(index);
        if name.is_empty() {
            return Err(RowError::new(
                row.line,
                format!("name for place {place} is required (event '{event_ref}')"),
            ));
        }
        if let Some(first) = seen.insert(name.to_lowercase(), place) {
            return Err(RowError::new(
                row.line,
                format!(
                    "duplicate athlete name '{name}' at places {first} and {place} (event '{event_ref}')"
                ),
            ));
        }
        *slot = name.to_string();
    }

    Ok(LeaderboardRow {
        line: row.line,
        event_ref: event_ref.to_string(),
        leaderboard: names,
    })
}

fn required<'a>(row: &'a CsvRow, index: usize, field: &str) -> Result<&'a str, RowError> {
    let value = row.cell(index);
    if value.is_empty() {
        return Err(RowError::new(row.line, format!("{field} is required")));
    }
    Ok(value)
}

fn parse_place(line: usize, text: &str) -> Result<u32, RowError> {
    text.parse::<i64>()
        .ok()
        .filter(|place| (i64::from(MIN_PLACE)..=i64::from(MAX_PLACE)).contains(place))
        .and_then(|place| u32::try_from(place).ok())
        .ok_or_else(|| {
            RowError::new(
                line,
                format!(
                    "place must be an integer between {MIN_PLACE} and {MAX_PLACE}, got '{text}'"
                ),
            )
        })
}
