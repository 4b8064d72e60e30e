//! One JSON file per event under a results directory.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use podium_model::{EventId, Placement};

use crate::error::StoreError;
use crate::traits::PlacementStore;

/// Contents of one event's results file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredResults {
    pub event_id: EventId,
    pub imported_at: DateTime<Utc>,
    pub placements: Vec<Placement>,
}

/// Writes `<root>/<event id>.json`, replacing the file on every import.
///
/// Writes go to a temp file that is synced and then renamed over the target,
/// so a reader sees either the old list or the new one.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the results file for an event.
    pub fn path_for(&self, event_id: &EventId) -> PathBuf {
        self.root.join(format!("{}.json", file_stem(event_id)))
    }

    /// Read back the stored results of an event, if any.
    pub fn load(&self, event_id: &EventId) -> Result<Option<StoredResults>, StoreError> {
        let path = self.path_for(event_id);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(StoreError::Io {
                    operation: "read",
                    path,
                    source: e,
                });
            }
        };
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|e| StoreError::Serialization {
                event_id: event_id.clone(),
                source: e,
            })
    }

    fn write_atomic(&self, path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
        fs::create_dir_all(&self.root).map_err(|e| StoreError::Io {
            operation: "create directory",
            path: self.root.clone(),
            source: e,
        })?;

        let temp_path = path.with_extension("json.tmp");
        let mut file = File::create(&temp_path).map_err(|e| StoreError::Io {
            operation: "create",
            path: temp_path.clone(),
            source: e,
        })?;
        file.write_all(bytes).map_err(|e| StoreError::Io {
            operation: "write",
            path: temp_path.clone(),
            source: e,
        })?;
        file.sync_all().map_err(|e| StoreError::Io {
            operation: "sync",
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, path).map_err(|e| StoreError::Io {
            operation: "replace",
            path: path.to_path_buf(),
            source: e,
        })
    }
}

impl PlacementStore for DirectoryStore {
    fn persist(&mut self, event_id: &EventId, placements: &[Placement]) -> Result<(), StoreError> {
        let results = StoredResults {
            event_id: event_id.clone(),
            imported_at: Utc::now(),
            placements: placements.to_vec(),
        };
        let bytes =
            serde_json::to_vec_pretty(&results).map_err(|e| StoreError::Serialization {
                event_id: event_id.clone(),
                source: e,
            })?;

        let path = self.path_for(event_id);
        self.write_atomic(&path, &bytes)?;
        tracing::debug!(path = %path.display(), "wrote results file");
        Ok(())
    }
}

/// Escape every byte outside `[a-z0-9_-]` as `%xx`. Upper-case letters are
/// escaped too, so ids differing only in case stay apart on case-insensitive
/// filesystems.
fn file_stem(event_id: &EventId) -> String {
    let mut stem = String::with_capacity(event_id.as_str().len());
    for byte in event_id.as_str().bytes() {
        if byte.is_ascii_lowercase() || byte.is_ascii_digit() || byte == b'_' || byte == b'-' {
            stem.push(char::from(byte));
        } else {
            stem.push('%');
            stem.push_str(&hex::encode([byte]));
        }
    }
    stem
}
