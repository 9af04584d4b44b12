use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Malformed JSON: {0}")]
    MalformedJson(String),
    #[error("Missing field: {0}")]
    MissingField(String),
    #[error("Invalid enum value: {0}")]
    InvalidEnumValue(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Invalid range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
    #[error("Internal invariant violation: {0}")]
    InvariantViolation(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
