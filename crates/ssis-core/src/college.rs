//! The college entity and its code convention.

use serde::{Deserialize, Serialize};

/// A college row: a short uppercase code (primary key) and a display name.
///
/// Both code and name are globally unique; the storage layer enforces
/// this with UNIQUE constraints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct College {
    pub code: String,
    pub name: String,
}

/// Normalizes a college code the way the entry forms do: trimmed and
/// uppercased. Applied to every code crossing the repository boundary so
/// that "ccs " and "CCS" address the same row.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}
