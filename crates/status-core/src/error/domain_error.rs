//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("No status set for user: {0}")]
    StatusNotFound(String),

    #[error("Predefined status not found: {0}")]
    PredefinedStatusNotFound(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid status type: {0}")]
    InvalidStatusType(String),

    #[error("Invalid status icon")]
    InvalidIcon,

    #[error("Message too long: max {max} characters")]
    MessageTooLong { max: usize },

    #[error("Clear-at timestamp is in the past")]
    ClearAtInPast,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Status already exists for user: {0}")]
    StatusAlreadyExists(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::StatusNotFound(_) => "UNKNOWN_STATUS",
            Self::PredefinedStatusNotFound(_) => "UNKNOWN_PREDEFINED_STATUS",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidStatusType(_) => "INVALID_STATUS_TYPE",
            Self::InvalidIcon => "INVALID_ICON",
            Self::MessageTooLong { .. } => "MESSAGE_TOO_LONG",
            Self::ClearAtInPast => "CLEAR_AT_IN_PAST",

            // Conflict
            Self::StatusAlreadyExists(_) => "STATUS_ALREADY_EXISTS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::StatusNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidStatusType(_)
                | Self::InvalidIcon
                | Self::MessageTooLong { .. }
                | Self::ClearAtInPast
                | Self::PredefinedStatusNotFound(_)
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::StatusAlreadyExists(_))
    }
}
