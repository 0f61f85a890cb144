//! Error handling utilities for repositories

use sqlx::Error as SqlxError;
use status_core::DomainError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "status not found" error
pub fn status_not_found(user_id: &str) -> DomainError {
    DomainError::StatusNotFound(user_id.to_string())
}

/// Create a "status already exists" error
pub fn status_already_exists(user_id: &str) -> DomainError {
    DomainError::StatusAlreadyExists(user_id.to_string())
}
