pub mod cli;
pub mod config;
pub mod errors;
pub mod requirements;

// Re-export commonly used types
pub use errors::{Diagnostic, ErrorKind, ModelError, ODataError, PathError};
pub use requirements::{Contextual, Fixed, Requirement, RequirementKey, Section, Status};
