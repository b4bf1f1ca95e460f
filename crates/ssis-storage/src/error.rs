//! Storage error types for ssis-storage.
//!
//! [`StoreError`] covers the full error taxonomy the repository exposes:
//! validation failures bubbled up from the core, unique-constraint
//! conflicts, missing update/delete targets, dangling foreign keys, and
//! raw engine failures surfaced verbatim.

use ssis_core::ValidationError;
use thiserror::Error;

/// Errors produced by repository operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A user-supplied field failed validation. Recoverable: re-prompt.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// A college name or code collided with an existing row.
    #[error("college name '{name}' or code '{code}' already exists")]
    CollegeConflict { name: String, code: String },

    /// A student with this ID already exists.
    #[error("student id already exists: {0}")]
    DuplicateStudentId(String),

    /// The targeted college does not exist.
    #[error("college not found: {0}")]
    CollegeNotFound(String),

    /// The targeted student does not exist.
    #[error("student not found: {0}")]
    StudentNotFound(String),

    /// A student referenced a college code with no matching row.
    #[error("unknown college code: {0}")]
    UnknownCollege(String),

    /// Schema migration failed on open.
    #[error("migration error: {0}")]
    Migration(String),

    /// Underlying engine failure, surfaced verbatim. The enclosing
    /// transaction has been rolled back; no partial effects remain.
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}
