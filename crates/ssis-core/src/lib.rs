pub mod college;
pub mod error;
pub mod program;
pub mod student;

// Re-export commonly used types
pub use college::{normalize_code, College};
pub use error::ValidationError;
pub use program::ProgramList;
pub use student::{is_valid_id_input, Sex, Student};
