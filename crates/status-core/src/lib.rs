//! # status-core
//!
//! Domain layer containing the user status entity, status types, the predefined
//! status catalog, and the repository trait for status storage.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{ClearAtPolicy, PredefinedStatus, UserStatus, PREDEFINED_STATUSES};
pub use error::DomainError;
pub use traits::{PageRequest, RepoResult, UserStatusRepository};
pub use value_objects::{StatusType, StatusTypeParseError};
