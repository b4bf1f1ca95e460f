//! Student repository operations: save, update, bulk delete, and the
//! filter+sort listing query that drives the table view.

use rusqlite::{params, params_from_iter, Row};
use serde::{Deserialize, Serialize};

use ssis_core::{Sex, Student};

use crate::error::StoreError;
use crate::store::{constraint_kind, ConstraintKind, SqliteStore};

/// A sortable column of the student listing.
///
/// Sorting is ascending with each column's native comparison; in
/// particular `YearLevel` is an INTEGER column, so it orders numerically
/// rather than lexicographically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortField {
    Id,
    FirstName,
    LastName,
    Sex,
    Program,
    YearLevel,
    CollegeName,
    CollegeCode,
}

impl SortField {
    /// The backing column name. Fixed strings, never user input, so it is
    /// safe to splice into ORDER BY.
    fn column(self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::FirstName => "first_name",
            SortField::LastName => "last_name",
            SortField::Sex => "sex",
            SortField::Program => "program",
            SortField::YearLevel => "year_level",
            SortField::CollegeName => "college_name",
            SortField::CollegeCode => "college_code",
        }
    }
}

/// Deserializes a sex column value. Rows are only ever written through
/// [`Student::validate`], so anything else present is treated as F.
fn str_to_sex(s: &str) -> Sex {
    match s {
        "M" => Sex::M,
        _ => Sex::F,
    }
}

fn student_from_row(row: &Row<'_>) -> rusqlite::Result<Student> {
    let sex: String = row.get(3)?;
    let year_level: i64 = row.get(5)?;
    Ok(Student {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        sex: str_to_sex(&sex),
        program: row.get(4)?,
        year_level: year_level as u8,
        college_name: row.get(6)?,
        college_code: row.get(7)?,
    })
}

const STUDENT_COLUMNS: &str =
    "id, first_name, last_name, sex, program, year_level, college_name, college_code";

impl SqliteStore {
    /// Inserts a new student after validating every field.
    ///
    /// Fails with [`StoreError::DuplicateStudentId`] if the ID is taken
    /// and [`StoreError::UnknownCollege`] if the college code has no row.
    pub fn save_student(&mut self, student: &Student) -> Result<(), StoreError> {
        student.validate()?;
        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO students (id, first_name, last_name, sex, program, year_level, college_name, college_code)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                student.id,
                student.first_name,
                student.last_name,
                student.sex.as_str(),
                student.program,
                student.year_level,
                student.college_name,
                student.college_code,
            ],
        )
        .map_err(|e| match constraint_kind(&e) {
            Some(ConstraintKind::Unique) => StoreError::DuplicateStudentId(student.id.clone()),
            Some(ConstraintKind::ForeignKey) => {
                StoreError::UnknownCollege(student.college_code.clone())
            }
            None => StoreError::Sqlite(e),
        })?;
        tx.commit()?;
        tracing::debug!(id = %student.id, "student saved");
        Ok(())
    }

    /// Replaces every field of an existing student except its immutable
    /// ID. `fields.id` is ignored; `id` names the target row.
    ///
    /// Fails with [`StoreError::StudentNotFound`] if no row has that ID,
    /// distinctly from a successful update that happened to change
    /// nothing.
    pub fn update_student(&mut self, id: &str, fields: &Student) -> Result<(), StoreError> {
        let target = Student {
            id: id.to_string(),
            ..fields.clone()
        };
        target.validate()?;
        let tx = self.conn.transaction()?;
        let changed = tx
            .execute(
                "UPDATE students SET first_name = ?1, last_name = ?2, sex = ?3, program = ?4,
                 year_level = ?5, college_name = ?6, college_code = ?7 WHERE id = ?8",
                params![
                    target.first_name,
                    target.last_name,
                    target.sex.as_str(),
                    target.program,
                    target.year_level,
                    target.college_name,
                    target.college_code,
                    target.id,
                ],
            )
            .map_err(|e| match constraint_kind(&e) {
                Some(ConstraintKind::ForeignKey) => {
                    StoreError::UnknownCollege(target.college_code.clone())
                }
                _ => StoreError::Sqlite(e),
            })?;
        if changed == 0 {
            return Err(StoreError::StudentNotFound(target.id));
        }
        tx.commit()?;
        tracing::debug!(%id, "student updated");
        Ok(())
    }

    /// Deletes the given students in one statement, returning how many
    /// rows were actually removed. IDs with no row simply don't count
    /// toward the total; a partial result is not an error.
    pub fn delete_students(&mut self, ids: &[String]) -> Result<usize, StoreError> {
        if ids.is_empty() {
            return Ok(0);
        }
        let placeholders = vec!["?"; ids.len()].join(", ");
        let sql = format!("DELETE FROM students WHERE id IN ({placeholders})");
        let tx = self.conn.transaction()?;
        let removed = tx.execute(&sql, params_from_iter(ids))?;
        tx.commit()?;
        tracing::debug!(requested = ids.len(), removed, "students deleted");
        Ok(removed)
    }

    /// Lists students, optionally filtered and/or sorted.
    ///
    /// When `query` is present it is substring-matched (SQL LIKE, the
    /// engine's default collation) against all seven visible text
    /// columns, OR-combined. When `sort` is present the result is
    /// ordered ascending by that column. The two compose independently;
    /// with neither, rows come back in storage order.
    pub fn search(
        &self,
        query: Option<&str>,
        sort: Option<SortField>,
    ) -> Result<Vec<Student>, StoreError> {
        let mut sql = format!("SELECT {STUDENT_COLUMNS} FROM students");
        let mut bind: Vec<String> = Vec::new();
        if let Some(q) = query {
            sql.push_str(
                " WHERE id LIKE ?1 OR first_name LIKE ?1 OR last_name LIKE ?1 OR sex LIKE ?1
                  OR program LIKE ?1 OR college_name LIKE ?1 OR college_code LIKE ?1",
            );
            bind.push(format!("%{q}%"));
        }
        if let Some(field) = sort {
            sql.push_str(" ORDER BY ");
            sql.push_str(field.column());
        }

        let mut stmt = self.conn.prepare_cached(&sql)?;
        let rows = stmt.query_map(params_from_iter(&bind), student_from_row)?;
        let mut result = Vec::new();
        for row in rows {
            result.push(row?);
        }
        Ok(result)
    }
}
