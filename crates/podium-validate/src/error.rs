use thiserror::Error;

/// A cross-row rule is violated within one event group.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("event '{event_key}': {reason}")]
pub struct GroupError {
    pub event_key: String,
    pub reason: String,
}

/// Result type for fail-fast group validation.
pub type Result<T> = std::result::Result<T, GroupError>;
