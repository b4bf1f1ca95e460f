//! SQLite persistence for the SSIS student registry.
//!
//! [`SqliteStore`] is the repository the presentation layer talks to:
//! typed CRUD for colleges and students, the filter+sort student listing,
//! and two read-through projections for populating dependent-choice
//! inputs. The schema declares ON UPDATE / ON DELETE CASCADE on both
//! foreign keys into `colleges`, so a code rename or deletion repoints or
//! removes dependent rows inside the same transaction as the parent
//! mutation.
//!
//! # Refresh contract
//!
//! After any successful mutating college operation the caller must
//! [`Projections::refresh`] before rendering, since cached choices may be
//! stale. After a failed operation nothing was committed and the snapshot
//! stays valid.
//!
//! # Modules
//!
//! - [`error`]: StoreError enum with the full failure taxonomy
//! - [`schema`]: database open + migration setup
//! - [`store`]: the SqliteStore handle
//! - [`colleges`]: college repository operations
//! - [`students`]: student repository operations and [`SortField`]
//! - [`projections`]: the name→code and code→programs snapshots
//! - [`seed`]: default catalog and first-run seeding

pub mod colleges;
pub mod error;
pub mod projections;
pub mod schema;
pub mod seed;
pub mod store;
pub mod students;

// Re-export key types for ergonomic use.
pub use error::StoreError;
pub use projections::Projections;
pub use seed::seed_default_catalog;
pub use store::SqliteStore;
pub use students::SortField;
