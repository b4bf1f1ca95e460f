//! The two read-through projections that drive dependent-choice inputs.
//!
//! [`Projections`] is a plain snapshot of the college tables, not an
//! authority: the presentation layer holds one, reads it synchronously to
//! populate its college and program choices, and calls
//! [`refresh`](Projections::refresh) after every *successful* mutating
//! college operation. On a failed operation nothing was committed, so the
//! snapshot is intentionally left alone.

use indexmap::IndexMap;
use std::collections::HashMap;

use ssis_core::ProgramList;

use crate::error::StoreError;
use crate::store::SqliteStore;

/// In-memory snapshot of the name→code and code→programs mappings.
#[derive(Debug, Clone, Default)]
pub struct Projections {
    /// College name to code, ordered by name.
    pub name_to_code: IndexMap<String, String>,
    /// College code to its decoded program list.
    pub programs_by_code: HashMap<String, ProgramList>,
}

impl Projections {
    /// Loads a fresh snapshot from storage.
    pub fn load(store: &SqliteStore) -> Result<Self, StoreError> {
        Ok(Projections {
            name_to_code: store.college_name_to_code()?,
            programs_by_code: store.programs_by_college()?,
        })
    }

    /// Replaces this snapshot with the current storage state.
    pub fn refresh(&mut self, store: &SqliteStore) -> Result<(), StoreError> {
        *self = Self::load(store)?;
        Ok(())
    }

    /// The code for a college name, if present.
    pub fn code_for(&self, name: &str) -> Option<&str> {
        self.name_to_code.get(name).map(String::as_str)
    }

    /// The program names offered under a college code; empty when the
    /// college has no program list.
    pub fn programs_for(&self, code: &str) -> &[String] {
        self.programs_by_code
            .get(code)
            .map(ProgramList::names)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_reflects_storage() {
        let mut store = SqliteStore::in_memory().unwrap();
        store
            .add_college("College of Nursing", "CHS", "BS IN NURSING")
            .unwrap();
        let projections = Projections::load(&store).unwrap();
        assert_eq!(projections.code_for("College of Nursing"), Some("CHS"));
        assert_eq!(projections.programs_for("CHS"), ["BS IN NURSING"]);
        assert!(projections.programs_for("NOPE").is_empty());
    }

    #[test]
    fn refresh_picks_up_mutations() {
        let mut store = SqliteStore::in_memory().unwrap();
        store.add_college("College of Nursing", "CHS", "").unwrap();
        let mut projections = Projections::load(&store).unwrap();

        store
            .update_college("CHS", "College of Health Sciences", "CHS", "BS IN NURSING")
            .unwrap();
        // Stale until refreshed.
        assert_eq!(projections.code_for("College of Health Sciences"), None);
        projections.refresh(&store).unwrap();
        assert_eq!(
            projections.code_for("College of Health Sciences"),
            Some("CHS")
        );
        assert_eq!(projections.code_for("College of Nursing"), None);
        assert_eq!(projections.programs_for("CHS"), ["BS IN NURSING"]);
    }

    #[test]
    fn name_order_is_sorted() {
        let mut store = SqliteStore::in_memory().unwrap();
        store.add_college("Zed College", "ZED", "").unwrap();
        store.add_college("Alpha College", "ALC", "").unwrap();
        let projections = Projections::load(&store).unwrap();
        let names: Vec<_> = projections.name_to_code.keys().cloned().collect();
        assert_eq!(names, ["Alpha College", "Zed College"]);
    }
}
