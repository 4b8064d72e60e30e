//! End-to-end sheet parsing: tokenize, resolve the header, decode every row.

use serde::{Deserialize, Serialize};

use podium_model::{LeaderboardRow, PlacementRow};

use crate::csv::{CsvRow, tokenize};
use crate::decode::{decode_leaderboard_row, decode_placement_row};
use crate::error::{IngestError, Result, RowError};
use crate::schema::{LEADERBOARD_FIELDS, LeaderboardColumns, PLACEMENT_FIELDS, PlacementColumns};

/// How row errors are reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorMode {
    /// Stop at the first malformed row.
    #[default]
    FailFast,
    /// Decode every row and report all malformed ones together.
    CollectAll,
}

/// Options for sheet parsing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOptions {
    pub error_mode: ErrorMode,
}

impl ParseOptions {
    #[must_use]
    pub fn with_error_mode(mut self, error_mode: ErrorMode) -> Self {
        self.error_mode = error_mode;
        self
    }
}

/// The two supported sheet shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SheetKind {
    /// One row per event and rank.
    Placements,
    /// One row per event with ten ranked names.
    Leaderboard,
}

impl SheetKind {
    /// Guess the sheet shape from its header row.
    ///
    /// A header with any column only the placement schema accepts (`place`,
    /// `entry_key`, `entry_name`) is a placement sheet, even if other
    /// placement columns are missing; otherwise it is a leaderboard.
    pub fn detect(text: &str) -> Option<Self> {
        let header = tokenize(text).into_iter().next()?;
        let placement_only = |cell: &String| {
            let cell = cell.trim().to_lowercase();
            PLACEMENT_FIELDS
                .iter()
                .flat_map(|field| field.aliases)
                .filter(|alias| !is_leaderboard_alias(alias))
                .any(|alias| *alias == cell)
        };
        if header.cells.iter().any(placement_only) {
            Some(Self::Placements)
        } else {
            Some(Self::Leaderboard)
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Placements => "placements",
            Self::Leaderboard => "leaderboard",
        }
    }
}

impl std::fmt::Display for SheetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a placement sheet, failing on the first malformed row.
pub fn parse_placements(text: &str) -> Result<Vec<PlacementRow>> {
    parse_placements_with_options(text, ParseOptions::default())
}

/// Parse a placement sheet with explicit options.
pub fn parse_placements_with_options(
    text: &str,
    options: ParseOptions,
) -> Result<Vec<PlacementRow>> {
    let (header, rows) = split_header(text)?;
    let columns = PlacementColumns::resolve(&header.cells)?;
    let decoded = decode_rows(&rows, options, |row| decode_placement_row(row, &columns))?;
    tracing::debug!(rows = decoded.len(), "decoded placement sheet");
    Ok(decoded)
}

/// Parse a leaderboard sheet, failing on the first malformed row.
pub fn parse_leaderboard(text: &str) -> Result<Vec<LeaderboardRow>> {
    parse_leaderboard_with_options(text, ParseOptions::default())
}

/// Parse a leaderboard sheet with explicit options.
pub fn parse_leaderboard_with_options(
    text: &str,
    options: ParseOptions,
) -> Result<Vec<LeaderboardRow>> {
    let (header, rows) = split_header(text)?;
    let columns = LeaderboardColumns::resolve(&header.cells)?;
    let decoded = decode_rows(&rows, options, |row| decode_leaderboard_row(row, &columns))?;
    tracing::debug!(rows = decoded.len(), "decoded leaderboard sheet");
    Ok(decoded)
}

fn is_leaderboard_alias(alias: &str) -> bool {
    LEADERBOARD_FIELDS
        .iter()
        .any(|field| field.aliases.contains(&alias))
}

fn split_header(text: &str) -> Result<(CsvRow, Vec<CsvRow>)> {
    let mut rows = tokenize(text).into_iter();
    let header = rows.next().ok_or(IngestError::EmptyInput)?;
    Ok((header, rows.collect()))
}

fn decode_rows<T, F>(rows: &[CsvRow], options: ParseOptions, decode: F) -> Result<Vec<T>>
where
    F: Fn(&CsvRow) -> std::result::Result<T, RowError>,
{
    match options.error_mode {
        ErrorMode::FailFast => rows
            .iter()
            .map(|row| decode(row).map_err(IngestError::from))
            .collect(),
        ErrorMode::CollectAll => {
            let mut decoded = Vec::with_capacity(rows.len());
            let mut errors = Vec::new();
            for row in rows {
                match decode(row) {
                    Ok(record) => decoded.push(record),
                    Err(error) => errors.push(error),
                }
            }
            if errors.is_empty() {
                Ok(decoded)
            } else {
                Err(IngestError::InvalidRows { errors })
            }
        }
    }
}
