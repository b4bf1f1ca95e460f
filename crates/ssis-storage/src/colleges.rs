//! College repository operations.
//!
//! A college and its program list live in separate tables but mutate as
//! one unit: `add_college` inserts both in the same transaction, and a
//! code rename in `update_college` repoints the program list and every
//! dependent student through the declared ON UPDATE CASCADE rule before
//! the transaction commits. No intermediate state with a dangling
//! reference is ever committed.

use indexmap::IndexMap;
use rusqlite::{params, OptionalExtension};
use std::collections::HashMap;

use ssis_core::{normalize_code, College, ProgramList, ValidationError};

use crate::error::StoreError;
use crate::store::{constraint_kind, ConstraintKind, SqliteStore};

impl SqliteStore {
    /// Adds a college, and its program list when `programs_csv` is
    /// non-empty, atomically.
    ///
    /// Fails with [`StoreError::CollegeConflict`] if the name or code is
    /// already taken.
    pub fn add_college(
        &mut self,
        name: &str,
        code: &str,
        programs_csv: &str,
    ) -> Result<College, StoreError> {
        let name = name.trim();
        let code = normalize_code(code);
        if name.is_empty() {
            return Err(ValidationError::MissingField {
                field: "college name",
            }
            .into());
        }
        if code.is_empty() {
            return Err(ValidationError::MissingField {
                field: "college code",
            }
            .into());
        }
        let programs = ProgramList::parse(programs_csv);

        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO colleges (code, name) VALUES (?1, ?2)",
            params![code, name],
        )
        .map_err(|e| match constraint_kind(&e) {
            Some(ConstraintKind::Unique) => StoreError::CollegeConflict {
                name: name.to_string(),
                code: code.clone(),
            },
            _ => StoreError::Sqlite(e),
        })?;
        if !programs.is_empty() {
            tx.execute(
                "INSERT INTO college_programs (code, programs) VALUES (?1, ?2)",
                params![code, programs.to_csv()],
            )?;
        }
        tx.commit()?;

        tracing::info!(%code, "college added");
        Ok(College {
            code,
            name: name.to_string(),
        })
    }

    /// Renames a college and/or its code, and appends any new program
    /// names to its list, in one transaction.
    ///
    /// The code change propagates to `students.college_code` and
    /// `college_programs.code` via FK cascade. The merged program list is
    /// then written back under the new code; the row is created if the
    /// college never had one. Student snapshot columns (`college_name`,
    /// `program`) are deliberately untouched.
    pub fn update_college(
        &mut self,
        old_code: &str,
        new_name: &str,
        new_code: &str,
        programs_to_append: &str,
    ) -> Result<College, StoreError> {
        let old_code = normalize_code(old_code);
        let new_name = new_name.trim();
        let new_code = normalize_code(new_code);
        if new_name.is_empty() {
            return Err(ValidationError::MissingField {
                field: "college name",
            }
            .into());
        }
        if new_code.is_empty() {
            return Err(ValidationError::MissingField {
                field: "college code",
            }
            .into());
        }

        let tx = self.conn.transaction()?;
        let changed = tx
            .execute(
                "UPDATE colleges SET name = ?1, code = ?2 WHERE code = ?3",
                params![new_name, new_code, old_code],
            )
            .map_err(|e| match constraint_kind(&e) {
                Some(ConstraintKind::Unique) => StoreError::CollegeConflict {
                    name: new_name.to_string(),
                    code: new_code.clone(),
                },
                _ => StoreError::Sqlite(e),
            })?;
        if changed == 0 {
            return Err(StoreError::CollegeNotFound(old_code));
        }

        // Merge the appended names into whatever list now lives under the
        // (possibly renamed) code, then write the result back.
        let existing: Option<String> = tx
            .query_row(
                "SELECT programs FROM college_programs WHERE code = ?1",
                params![new_code],
                |row| row.get(0),
            )
            .optional()?;
        let mut programs = ProgramList::parse(existing.as_deref().unwrap_or(""));
        programs.append_csv(programs_to_append);
        if existing.is_some() {
            tx.execute(
                "UPDATE college_programs SET programs = ?1 WHERE code = ?2",
                params![programs.to_csv(), new_code],
            )?;
        } else {
            tx.execute(
                "INSERT INTO college_programs (code, programs) VALUES (?1, ?2)",
                params![new_code, programs.to_csv()],
            )?;
        }
        tx.commit()?;

        tracing::info!(%old_code, %new_code, "college updated");
        Ok(College {
            code: new_code,
            name: new_name.to_string(),
        })
    }

    /// Deletes a college; the cascade removes its program list and every
    /// student referencing it. Returns the number of college rows removed
    /// (0 means the code did not exist, which is a no-op, not an error).
    ///
    /// Destructive and irreversible. Asking the user for confirmation is
    /// the caller's responsibility.
    pub fn delete_college(&mut self, code: &str) -> Result<usize, StoreError> {
        let code = normalize_code(code);
        let tx = self.conn.transaction()?;
        let removed = tx.execute("DELETE FROM colleges WHERE code = ?1", params![code])?;
        tx.commit()?;
        if removed > 0 {
            tracing::info!(%code, "college deleted, cascade removed its programs and students");
        }
        Ok(removed)
    }

    /// Looks up a single college by code.
    pub fn get_college(&self, code: &str) -> Result<Option<College>, StoreError> {
        let code = normalize_code(code);
        let row = self
            .conn
            .query_row(
                "SELECT code, name FROM colleges WHERE code = ?1",
                params![code],
                |row| {
                    Ok(College {
                        code: row.get(0)?,
                        name: row.get(1)?,
                    })
                },
            )
            .optional()?;
        Ok(row)
    }

    /// The name→code projection, ordered by college name.
    pub fn college_name_to_code(&self) -> Result<IndexMap<String, String>, StoreError> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT name, code FROM colleges ORDER BY name")?;
        let rows = stmt.query_map([], |row| {
            let name: String = row.get(0)?;
            let code: String = row.get(1)?;
            Ok((name, code))
        })?;
        let mut map = IndexMap::new();
        for row in rows {
            let (name, code) = row?;
            map.insert(name, code);
        }
        Ok(map)
    }

    /// The code→programs projection.
    pub fn programs_by_college(&self) -> Result<HashMap<String, ProgramList>, StoreError> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT code, programs FROM college_programs")?;
        let rows = stmt.query_map([], |row| {
            let code: String = row.get(0)?;
            let programs: String = row.get(1)?;
            Ok((code, programs))
        })?;
        let mut map = HashMap::new();
        for row in rows {
            let (code, programs) = row?;
            map.insert(code, ProgramList::parse(&programs));
        }
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SqliteStore {
        SqliteStore::in_memory().unwrap()
    }

    #[test]
    fn add_normalizes_the_code() {
        let mut store = store();
        let college = store.add_college("College of Nursing", " chs ", "").unwrap();
        assert_eq!(college.code, "CHS");
        assert!(store.get_college("chs").unwrap().is_some());
    }

    #[test]
    fn add_rejects_blank_name_or_code() {
        let mut store = store();
        assert!(matches!(
            store.add_college("  ", "CHS", ""),
            Err(StoreError::Invalid(_))
        ));
        assert!(matches!(
            store.add_college("College of Nursing", "  ", ""),
            Err(StoreError::Invalid(_))
        ));
    }

    #[test]
    fn add_with_programs_writes_both_tables() {
        let mut store = store();
        store
            .add_college("College of Nursing", "CHS", "BS IN NURSING, BS IN NURSING,")
            .unwrap();
        let programs = store.programs_by_college().unwrap();
        assert_eq!(programs["CHS"].names(), ["BS IN NURSING"]);
    }

    #[test]
    fn add_without_programs_skips_the_program_row() {
        let mut store = store();
        store.add_college("College of Nursing", "CHS", "  ").unwrap();
        assert!(store.programs_by_college().unwrap().is_empty());
    }

    #[test]
    fn duplicate_code_or_name_conflicts() {
        let mut store = store();
        store.add_college("College of Nursing", "CHS", "").unwrap();
        assert!(matches!(
            store.add_college("Other Name", "CHS", ""),
            Err(StoreError::CollegeConflict { .. })
        ));
        assert!(matches!(
            store.add_college("College of Nursing", "XYZ", ""),
            Err(StoreError::CollegeConflict { .. })
        ));
    }

    #[test]
    fn update_missing_college_is_not_found() {
        let mut store = store();
        assert!(matches!(
            store.update_college("NOPE", "Name", "CODE", ""),
            Err(StoreError::CollegeNotFound(_))
        ));
    }

    #[test]
    fn update_merges_programs_set_wise() {
        let mut store = store();
        store
            .add_college("College of Computer Studies", "CCS", "A,B")
            .unwrap();
        store
            .update_college("CCS", "College of Computer Studies", "CCS", "B,C")
            .unwrap();
        let programs = store.programs_by_college().unwrap();
        assert_eq!(programs["CCS"].names(), ["A", "B", "C"]);
    }

    #[test]
    fn update_creates_program_row_when_absent() {
        let mut store = store();
        store.add_college("College of Nursing", "CHS", "").unwrap();
        store
            .update_college("CHS", "College of Nursing", "CHS", "BS IN NURSING")
            .unwrap();
        let programs = store.programs_by_college().unwrap();
        assert_eq!(programs["CHS"].names(), ["BS IN NURSING"]);
    }

    #[test]
    fn update_rename_conflicts_with_other_college() {
        let mut store = store();
        store.add_college("Alpha", "AAA", "").unwrap();
        store.add_college("Beta", "BBB", "").unwrap();
        assert!(matches!(
            store.update_college("BBB", "Beta", "AAA", ""),
            Err(StoreError::CollegeConflict { .. })
        ));
        // Rollback left BBB untouched.
        assert!(store.get_college("BBB").unwrap().is_some());
    }

    #[test]
    fn delete_missing_college_is_a_noop() {
        let mut store = store();
        assert_eq!(store.delete_college("NOPE").unwrap(), 0);
    }

    #[test]
    fn name_to_code_is_sorted_by_name() {
        let mut store = store();
        store.add_college("Zed College", "ZED", "").unwrap();
        store.add_college("Alpha College", "ALC", "").unwrap();
        let map = store.college_name_to_code().unwrap();
        let names: Vec<_> = map.keys().cloned().collect();
        assert_eq!(names, ["Alpha College", "Zed College"]);
        assert_eq!(map["Alpha College"], "ALC");
    }
}
