//! The student entity, its field validation, and the ID input mask.
//!
//! `college_name` and `program` are denormalized snapshots captured when
//! the row is saved. A later college rename cascades only the foreign-key
//! `college_code` column; the snapshot text is deliberately left alone
//! and can drift from the college table. This matches the historical
//! dataset and is relied on by reporting, so it is not "fixed" here.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Live-typing mask for student IDs: up to four digits, optionally
/// followed by a hyphen and up to four more.
static ID_MASK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{0,4}(-\d{0,4})?$").unwrap());

/// Checks a partially typed student ID against the input mask.
///
/// This is a keystroke-level check: `""` and `"12"` are valid-so-far, as
/// is the complete `"2021-0001"`. Save-time completeness (non-empty, full
/// format) is enforced by [`Student::validate`].
pub fn is_valid_id_input(input: &str) -> bool {
    ID_MASK.is_match(input)
}

/// Student sex, stored as a single-character TEXT column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    F,
    M,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::F => "F",
            Sex::M => "M",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "F" => Ok(Sex::F),
            "M" => Ok(Sex::M),
            other => Err(ValidationError::InvalidSex {
                value: other.to_string(),
            }),
        }
    }
}

/// One student row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Primary key, format `NNNN` or `NNNN-NNNN`.
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub sex: Sex,
    /// Program name snapshot, taken from the college's program list at
    /// save time.
    pub program: String,
    /// 1 through 5.
    pub year_level: u8,
    /// College name snapshot at save time; not cascade-updated.
    pub college_name: String,
    /// Foreign key into the colleges table; cascade-updated on rename.
    pub college_code: String,
}

impl Student {
    /// Save-time validation: every field non-empty, the ID fully formed,
    /// and the year level within the 1-5 range the year selector offers.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("id", &self.id),
            ("first name", &self.first_name),
            ("last name", &self.last_name),
            ("program", &self.program),
            ("college name", &self.college_name),
            ("college code", &self.college_code),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::MissingField { field });
            }
        }
        if !is_valid_id_input(&self.id) {
            return Err(ValidationError::MalformedId {
                id: self.id.clone(),
            });
        }
        if !(1..=5).contains(&self.year_level) {
            return Err(ValidationError::YearLevelOutOfRange {
                value: i64::from(self.year_level),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Student {
        Student {
            id: "2021-0001".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Cruz".to_string(),
            sex: Sex::F,
            program: "BS IN COMPUTER SCIENCE".to_string(),
            year_level: 2,
            college_name: "College of Computer Studies".to_string(),
            college_code: "CCS".to_string(),
        }
    }

    #[test]
    fn id_mask_accepts_partial_input() {
        for input in ["", "1", "12", "1234", "1234-", "1234-5", "2021-0001"] {
            assert!(is_valid_id_input(input), "rejected {input:?}");
        }
    }

    #[test]
    fn id_mask_rejects_bad_input() {
        for input in ["12345", "12a4", "1234-56789", "1234--1", "-1234", "12 34"] {
            assert!(!is_valid_id_input(input), "accepted {input:?}");
        }
    }

    #[test]
    fn valid_student_passes() {
        assert_eq!(sample().validate(), Ok(()));
    }

    #[test]
    fn empty_required_field_is_rejected() {
        let mut student = sample();
        student.first_name = "   ".to_string();
        assert_eq!(
            student.validate(),
            Err(ValidationError::MissingField {
                field: "first name"
            })
        );
    }

    #[test]
    fn empty_id_is_rejected_despite_passing_the_mask() {
        let mut student = sample();
        student.id = String::new();
        assert_eq!(
            student.validate(),
            Err(ValidationError::MissingField { field: "id" })
        );
    }

    #[test]
    fn year_level_out_of_range_is_rejected() {
        for year in [0u8, 6, 10] {
            let mut student = sample();
            student.year_level = year;
            assert_eq!(
                student.validate(),
                Err(ValidationError::YearLevelOutOfRange {
                    value: i64::from(year)
                })
            );
        }
    }

    #[test]
    fn sex_parse_and_display() {
        assert_eq!("F".parse::<Sex>(), Ok(Sex::F));
        assert_eq!("M".parse::<Sex>(), Ok(Sex::M));
        assert!("x".parse::<Sex>().is_err());
        assert_eq!(Sex::M.to_string(), "M");
    }

    #[test]
    fn serde_roundtrip() {
        let student = sample();
        let json = serde_json::to_string(&student).unwrap();
        let back: Student = serde_json::from_str(&json).unwrap();
        assert_eq!(student, back);
    }
}
