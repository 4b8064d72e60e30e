//! CLI argument definitions for podium.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use podium_ingest::SheetKind;

#[derive(Parser)]
#[command(
    name = "podium",
    version,
    about = "Check and import sporting results sheets",
    long_about = "Check and import sporting results exported from spreadsheets.\n\n\
                  Accepts placement sheets (one row per event and rank) and global\n\
                  leaderboard sheets (one row per event with ten ranked names)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow athlete names to appear in trace-level logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse and validate a results sheet without importing it.
    Check(CheckArgs),

    /// Validate a results sheet and import it event by event.
    Import(ImportArgs),

    /// List the header names each sheet schema accepts.
    Schema,
}

/// Input options shared by `check` and `import`.
#[derive(Args)]
pub struct SheetArgs {
    /// Path to the results sheet (comma-delimited, UTF-8).
    #[arg(value_name = "SHEET")]
    pub input: PathBuf,

    /// Sheet shape; `auto` picks from the header row.
    #[arg(long = "schema", value_enum, default_value = "auto")]
    pub schema: SchemaArg,

    /// Report every malformed row and group instead of stopping at the first.
    #[arg(long = "all-errors")]
    pub all_errors: bool,
}

#[derive(Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub sheet: SheetArgs,
}

#[derive(Args)]
pub struct ImportArgs {
    #[command(flatten)]
    pub sheet: SheetArgs,

    /// Event catalog (JSON list of events) used to resolve event references.
    #[arg(long = "catalog", value_name = "PATH")]
    pub catalog: PathBuf,

    /// Results directory; one JSON file per event is replaced on import.
    #[arg(long = "store", value_name = "DIR", required_unless_present = "dry_run")]
    pub store: Option<PathBuf>,

    /// Write a JSON import report to this path.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Resolve and import into memory only; nothing is written to the store.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

/// CLI sheet schema choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SchemaArg {
    Auto,
    Placements,
    Leaderboard,
}

impl SchemaArg {
    /// Sheet kind to parse `text` as; `None` when auto-detection finds no header.
    pub fn sheet_kind(self, text: &str) -> Option<SheetKind> {
        match self {
            Self::Auto => SheetKind::detect(text),
            Self::Placements => Some(SheetKind::Placements),
            Self::Leaderboard => Some(SheetKind::Leaderboard),
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
