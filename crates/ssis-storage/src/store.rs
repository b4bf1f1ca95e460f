//! The [`SqliteStore`] repository handle.
//!
//! One store wraps one `rusqlite::Connection`. Every mutating operation
//! (defined in the `colleges` and `students` modules) runs inside a
//! single transaction: commit happens before the call returns, and any
//! error path drops the uncommitted transaction, which rolls it back.
//! Reads go straight through the connection.

use rusqlite::Connection;

use crate::error::StoreError;

/// SQLite-backed repository for colleges, program lists, and students.
pub struct SqliteStore {
    pub(crate) conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) a database at `path`, applying the schema
    /// idempotently.
    pub fn new(path: &str) -> Result<Self, StoreError> {
        let conn = crate::schema::open_database(path)?;
        Ok(SqliteStore { conn })
    }

    /// Opens an in-memory database (for testing).
    pub fn in_memory() -> Result<Self, StoreError> {
        let conn = crate::schema::open_in_memory()?;
        Ok(SqliteStore { conn })
    }
}

/// The constraint classes the repository maps to typed errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConstraintKind {
    /// PRIMARY KEY or UNIQUE violation.
    Unique,
    /// FOREIGN KEY violation.
    ForeignKey,
}

/// Decodes a rusqlite error into a constraint class, if it is one.
///
/// SQLite reports the specific constraint in the extended result code;
/// anything that is not a unique/FK violation passes through as a raw
/// engine failure.
pub(crate) fn constraint_kind(err: &rusqlite::Error) -> Option<ConstraintKind> {
    if let rusqlite::Error::SqliteFailure(e, _) = err {
        match e.extended_code {
            rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY
            | rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE => Some(ConstraintKind::Unique),
            rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY => Some(ConstraintKind::ForeignKey),
            _ => None,
        }
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_violation_is_decoded() {
        let store = SqliteStore::in_memory().unwrap();
        store
            .conn
            .execute("INSERT INTO colleges (code, name) VALUES ('A', 'Alpha')", [])
            .unwrap();
        let err = store
            .conn
            .execute("INSERT INTO colleges (code, name) VALUES ('A', 'Other')", [])
            .unwrap_err();
        assert_eq!(constraint_kind(&err), Some(ConstraintKind::Unique));
    }

    #[test]
    fn foreign_key_violation_is_decoded() {
        let store = SqliteStore::in_memory().unwrap();
        let err = store
            .conn
            .execute(
                "INSERT INTO students VALUES ('0001', 'A', 'B', 'F', 'P', 1, 'N', 'NOPE')",
                [],
            )
            .unwrap_err();
        assert_eq!(constraint_kind(&err), Some(ConstraintKind::ForeignKey));
    }

    #[test]
    fn non_constraint_errors_pass_through() {
        let err = rusqlite::Error::QueryReturnedNoRows;
        assert_eq!(constraint_kind(&err), None);
    }
}
