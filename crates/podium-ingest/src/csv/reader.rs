//! Loading result sheets from disk.

use std::path::Path;

use crate::error::{IngestError, Result};

/// Maximum source size held in memory (16 MB).
///
/// Result sheets are a few thousand rows at most.
pub const MAX_SOURCE_SIZE: u64 = 16 * 1024 * 1024;

/// Read a result sheet as UTF-8 text.
///
/// A UTF-8 byte-order mark is stripped; UTF-16 input is rejected.
pub fn read_source(path: &Path) -> Result<String> {
    read_source_with_limit(path, MAX_SOURCE_SIZE)
}

/// Read a result sheet, rejecting files larger than `max_size` bytes.
pub fn read_source_with_limit(path: &Path, max_size: u64) -> Result<String> {
    let metadata = std::fs::metadata(path).map_err(|e| io_error(path, e))?;
    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    let bytes = std::fs::read(path).map_err(|e| io_error(path, e))?;
    check_encoding(path, &bytes)?;

    let text = String::from_utf8(bytes).map_err(|_| IngestError::InvalidUtf8 {
        path: path.to_path_buf(),
    })?;

    let text = match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    };

    tracing::debug!(path = %path.display(), bytes = text.len(), "read source");
    Ok(text)
}

fn io_error(path: &Path, source: std::io::Error) -> IngestError {
    if source.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Reject UTF-16 byte-order marks.
fn check_encoding(path: &Path, bytes: &[u8]) -> Result<()> {
    let encoding = match bytes {
        [0xFF, 0xFE, ..] => "UTF-16 LE",
        [0xFE, 0xFF, ..] => "UTF-16 BE",
        _ => return Ok(()),
    };
    Err(IngestError::UnsupportedEncoding {
        path: path.to_path_buf(),
        encoding,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_file(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_read_source_plain() {
        let file = create_temp_file(b"event_key,place\nski_100,1\n");
        let text = read_source(file.path()).unwrap();
        assert_eq!(text, "event_key,place\nski_100,1\n");
    }

    #[test]
    fn test_read_source_strips_utf8_bom() {
        let file = create_temp_file(b"\xEF\xBB\xBFevent_key\n");
        let text = read_source(file.path()).unwrap();
        assert_eq!(text, "event_key\n");
    }

    #[test]
    fn test_read_source_rejects_utf16() {
        let file = create_temp_file(&[0xFF, 0xFE, b'a', 0x00]);
        let err = read_source(file.path()).unwrap_err();
        assert!(matches!(
            err,
            IngestError::UnsupportedEncoding {
                encoding: "UTF-16 LE",
                ..
            }
        ));
    }

    #[test]
    fn test_read_source_rejects_invalid_utf8() {
        let file = create_temp_file(&[b'a', 0xC3, 0x28]);
        let err = read_source(file.path()).unwrap_err();
        assert!(matches!(err, IngestError::InvalidUtf8 { .. }));
    }

    #[test]
    fn test_read_source_missing_file() {
        let err = read_source(Path::new("/nonexistent/results.csv")).unwrap_err();
        assert!(matches!(err, IngestError::FileNotFound { .. }));
    }

    #[test]
    fn test_read_source_size_limit() {
        let file = create_temp_file(b"0123456789");
        let err = read_source_with_limit(file.path(), 4).unwrap_err();
        assert!(matches!(
            err,
            IngestError::FileTooLarge {
                size: 10,
                max_size: 4,
                ..
            }
        ));
    }
}
