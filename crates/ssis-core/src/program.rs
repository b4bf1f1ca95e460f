//! Insertion-ordered, deduplicated lists of program names.
//!
//! Program lists are persisted as a single comma-delimited TEXT column.
//! [`ProgramList`] is the only place that encoding appears: `parse` and
//! `to_csv` sit at the storage boundary, and everything in between works
//! with the decoded list. Names are trimmed on entry, empty segments are
//! dropped, and duplicates are ignored while preserving first-seen order.

use serde::{Deserialize, Serialize};

/// An ordered, deduplicated list of program names for one college.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramList {
    names: Vec<String>,
}

impl ProgramList {
    /// Creates an empty program list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a comma-delimited string into a program list.
    ///
    /// Segments are trimmed; empty segments and duplicates are dropped.
    pub fn parse(csv: &str) -> Self {
        let mut list = Self::new();
        for segment in csv.split(',') {
            list.append(segment);
        }
        list
    }

    /// Encodes the list back into its comma-delimited storage form.
    pub fn to_csv(&self) -> String {
        self.names.join(",")
    }

    /// Appends a name if it is non-empty (after trimming) and not already
    /// present. Returns whether the name was added.
    pub fn append(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.contains(name) {
            return false;
        }
        self.names.push(name.to_string());
        true
    }

    /// Appends every name from a comma-delimited string, with the same
    /// trim/dedup semantics as [`append`](Self::append). Returns how many
    /// names were actually added.
    pub fn append_csv(&mut self, csv: &str) -> usize {
        csv.split(',').filter(|s| self.append(s)).count()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// The decoded names, in insertion order.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}
