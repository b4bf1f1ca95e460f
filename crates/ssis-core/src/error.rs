//! Core error types for ssis-core.
//!
//! Uses `thiserror` for structured, matchable error variants covering
//! every way a form submission can fail validation. All variants are
//! recoverable: the caller re-prompts the user and retries.

use thiserror::Error;

/// Validation errors produced when checking user-supplied fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field was empty.
    #[error("required field is empty: {field}")]
    MissingField { field: &'static str },

    /// Year level outside the accepted 1-5 range.
    #[error("year level out of range: {value}")]
    YearLevelOutOfRange { value: i64 },

    /// Sex value was neither "F" nor "M".
    #[error("invalid sex: '{value}'")]
    InvalidSex { value: String },

    /// Student ID does not match the `NNNN` / `NNNN-NNNN` format.
    #[error("malformed student id: '{id}'")]
    MalformedId { id: String },
}
