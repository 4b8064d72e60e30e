//! Error types for result sheet ingestion.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// The header row cannot satisfy a required field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing required column '{missing_field}' (accepted: {})", .accepted.join(", "))]
pub struct SchemaError {
    /// Logical name of the field that could not be resolved.
    pub missing_field: String,
    /// Header spellings that would have satisfied it.
    pub accepted: Vec<String>,
}

/// A single row's fields are malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {reason}")]
pub struct RowError {
    /// 1-based line on which the row starts.
    pub line: usize,
    pub reason: String,
}

impl RowError {
    pub fn new(line: usize, reason: impl Into<String>) -> Self {
        Self {
            line,
            reason: reason.into(),
        }
    }
}

/// Errors that can occur while reading and decoding a result sheet.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Source Errors ===
    /// Source file not found.
    #[error("source file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read the source file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source file exceeds the in-memory size limit.
    #[error("source file {path} is {size} bytes, limit is {max_size}")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// Source file uses an encoding other than UTF-8.
    #[error("unsupported encoding {encoding} in {path} (expected UTF-8)")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    /// Source file is not valid UTF-8.
    #[error("source file {path} is not valid UTF-8")]
    InvalidUtf8 { path: PathBuf },

    // === Sheet Errors ===
    /// No header row: the input is empty or blank.
    #[error("input has no header row")]
    EmptyInput,

    /// Header cannot satisfy the schema.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// First malformed row (fail-fast mode).
    #[error(transparent)]
    InvalidRow(#[from] RowError),

    /// Every malformed row (collect-all mode). Never empty.
    #[error("{}", RowErrorList(.errors))]
    InvalidRows { errors: Vec<RowError> },
}

impl IngestError {
    /// Row errors carried by this error, in line order.
    pub fn row_errors(&self) -> &[RowError] {
        match self {
            Self::InvalidRow(error) => std::slice::from_ref(error),
            Self::InvalidRows { errors } => errors,
            _ => &[],
        }
    }
}

struct RowErrorList<'a>(&'a [RowError]);

impl fmt::Display for RowErrorList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            [] => f.write_str("invalid rows"),
            [only] => write!(f, "{only}"),
            [first, rest @ ..] => write!(f, "{first} (and {} more invalid rows)", rest.len()),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
