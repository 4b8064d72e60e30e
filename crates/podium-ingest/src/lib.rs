//! Result sheet ingestion.
//!
//! Turns spreadsheet exports of sporting results into decoded rows:
//!
//! - **Tokenizing**: a quote-aware, newline-tolerant cell splitter
//! - **Schema resolution**: maps logical fields to columns through alias tables
//! - **Row decoding**: trims, type-checks and line-numbers every row
//!
//! Two sheet shapes are supported. A *placement* sheet has one row per event
//! and rank; a *leaderboard* sheet has one row per event with ten ranked names.
//!
//! # Example
//!
//! ```ignore
//! use podium_ingest::{parse_placements, read_source};
//!
//! let text = read_source(Path::new("results.csv"))?;
//! let rows = parse_placements(&text)?;
//! ```

mod csv;
mod decode;
mod error;
mod parse;
mod schema;

// === Error Types ===
pub use error::{IngestError, Result, RowError, SchemaError};

// === Tokenizing ===
pub use csv::{CsvRow, MAX_SOURCE_SIZE, read_source, read_source_with_limit, tokenize};

// === Schema Resolution ===
pub use schema::{
    ColumnMap, FieldSpec, LEADERBOARD_FIELDS, LeaderboardColumns, PLACEMENT_FIELDS,
    PlacementColumns, resolve,
};

// === Row Decoding ===
pub use decode::{decode_leaderboard_row, decode_placement_row};
pub use parse::{
    ErrorMode, ParseOptions, SheetKind, parse_leaderboard, parse_leaderboard_with_options,
    parse_placements, parse_placements_with_options,
};
