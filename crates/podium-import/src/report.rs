//! Machine-readable summary of one import run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use podium_model::{ImportLog, ImportOutcome};

/// Summary written next to an import, one per source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportReport {
    /// Sheet shape that was imported (`placements` or `leaderboard`).
    pub sheet: String,
    /// Hex SHA-256 of the source text.
    pub source_sha256: String,
    pub finished_at: DateTime<Utc>,
    pub imported: usize,
    pub failed: usize,
    pub outcomes: Vec<ImportOutcome>,
}

impl ImportReport {
    pub fn new(sheet: impl Into<String>, source: &str, log: &ImportLog) -> Self {
        Self {
            sheet: sheet.into(),
            source_sha256: source_fingerprint(source),
            finished_at: Utc::now(),
            imported: log.imported_count(),
            failed: log.failed_count(),
            outcomes: log.outcomes.clone(),
        }
    }
}

/// Hex SHA-256 of a source text.
///
/// Identical files get identical fingerprints, which lets callers spot a
/// re-submitted sheet.
pub fn source_fingerprint(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}
