use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("event id must not be blank")]
    BlankEventId,
    #[error("place {0} is outside the allowed range {min}..={max}", min = crate::MIN_PLACE, max = crate::MAX_PLACE)]
    PlaceOutOfRange(i64),
}

pub type Result<T> = std::result::Result<T, ModelError>;
