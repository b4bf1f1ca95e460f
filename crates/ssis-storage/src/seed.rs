//! Default college catalog and first-run seeding.
//!
//! The catalog is a deployment-time default dataset, not part of the
//! repository contract; deployments may skip this and load their own.
//! Seeding only runs against an empty colleges table, and a row already
//! present is a benign skip (INSERT OR IGNORE), the one place a failure
//! is intentionally swallowed.

use rusqlite::params;

use ssis_core::ProgramList;

use crate::error::StoreError;
use crate::store::SqliteStore;

/// Default colleges as (name, code) pairs.
pub const DEFAULT_COLLEGES: &[(&str, &str)] = &[
    ("College of Engineering and Technology", "COET"),
    ("College of Education", "CED"),
    ("College of Arts and Science", "CASS"),
    ("College of Business Administration & Accountancy", "CBAA"),
    ("College of Nursing", "CHS"),
    ("College of Science and Mathematics", "CSM"),
    ("College of Computer Studies", "CCS"),
];

/// Default program catalogs as (code, comma-joined names) pairs.
pub const DEFAULT_PROGRAMS: &[(&str, &str)] = &[
    (
        "COET",
        "DIPLOMA IN CHEMICAL ENGINEERING TECHNOLOGY,BS IN CIVIL ENGINEERING,BS IN CERAMICS ENGINEERING,BS IN CHEMICAL ENGINEERING,BS IN COMPUTER ENGINEERING,BS IN ELECTRONICS & COMMUNICATIONS ENGINEERING,BS IN ELECTRICAL ENGINEERING,BS IN MINING ENG'G.,BS IN ENVIRONMENTAL ENGINEERING TECHNOLOGY,BS IN MECHANICAL ENGINEERING,BS IN METALLURGICAL ENGINEERING",
    ),
    (
        "CED",
        "BACHELOR OF SECONDARY EDUCATION (BIOLOGY),BS IN INDUSTRIAL EDUCATION (DRAFTING),BACHELOR OF SECONDARY EDUCATION (CHEMISTRY),BACHELOR OF SECONDARY EDUCATION (PHYSICS),BACHELOR OF SECONDARY EDUCATION (MATHEMATICS),BACHELOR OF SECONDARY EDUCATION (MAPEH),Certificate Program for Teachers,BACHELOR OF SECONDARY EDUCATION (TLE),BACHELOR OF SECONDARY EDUCATION (GENERAL SCIENCE),BACHELOR OF ELEMENTARY EDUCATION (ENGLISH),BACHELOR OF ELEMENTARY EDUCATION (SCIENCE AND HEALTH),BS IN TECHNOLOGY TEACHER EDUCATION (INDUSTRIAL TECH),BS IN TECHNOLOGY TEACHER EDUCATION (DRAFTING TECH)",
    ),
    (
        "CASS",
        "GENERAL EDUCATION PROGRAM,BA IN ENGLISH,BS IN PSYCHOLOGY,BA IN FILIPINO,BA IN HISTORY,BA IN POLITICAL SCIENCE",
    ),
    (
        "CBAA",
        "BS IN BUSINESS ADMINISTRATION (BUSINESS ECONOMICS),BS IN BUSINESS ADMINISTRATION (ECONOMICS),BS IN BUSINESS ADMINISTRATION (ENTREPRENEURIAL MARKETING),BS IN HOTEL AND RESTAURANT MANAGEMENT,BS IN ACCOUNTANCY",
    ),
    ("CHS", "BS IN NURSING"),
    (
        "CSM",
        "BS IN BIOLOGY (GENERAL),BS IN STATISTICS,BS IN BIOLOGY (BOTANY),BS IN BIOLOGY (ZOOLOGY),BS IN BIOLOGY (MARINE),BS IN CHEMISTRY,BS IN MATHEMATICS,BS IN PHYSICS",
    ),
    (
        "CCS",
        "BS IN COMPUTER SCIENCE,BS IN INFORMATION TECHNOLOGY,BS IN INFORMATION SYSTEMS,BS IN ELECTRONICS AND COMPUTER TECHNOLOGY (EMBEDDED SYSTEMS),BS IN ELECTRONICS AND COMPUTER TECHNOLOGY (COMMUNICATIONS SYSTEM),DIPLOMA IN ELECTRONICS TECHNOLOGY,DIPLOMA IN ELECTRONICS ENGINEERING TECH (Communication Electronics),DIPLOMA IN ELECTRONICS ENGINEERING TECH (Computer Electronics)",
    ),
];

/// Seeds the default catalog if, and only if, the colleges table is
/// empty. Returns whether seeding ran. All inserts happen in one
/// transaction; programs are normalized through [`ProgramList`] on the
/// way in.
pub fn seed_default_catalog(store: &mut SqliteStore) -> Result<bool, StoreError> {
    let count: i64 = store
        .conn
        .query_row("SELECT COUNT(*) FROM colleges", [], |row| row.get(0))?;
    if count > 0 {
        return Ok(false);
    }

    let tx = store.conn.transaction()?;
    for (name, code) in DEFAULT_COLLEGES {
        tx.execute(
            "INSERT OR IGNORE INTO colleges (code, name) VALUES (?1, ?2)",
            params![code, name],
        )?;
    }
    for (code, csv) in DEFAULT_PROGRAMS {
        tx.execute(
            "INSERT OR IGNORE INTO college_programs (code, programs) VALUES (?1, ?2)",
            params![code, ProgramList::parse(csv).to_csv()],
        )?;
    }
    tx.commit()?;

    tracing::info!(colleges = DEFAULT_COLLEGES.len(), "seeded default college catalog");
    Ok(true)
}
