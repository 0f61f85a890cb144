//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Status views keep
//! `null` fields instead of omitting them.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Status Views
// ============================================================================

/// Status of the caller as seen by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStatusView {
    pub user_id: String,
    pub message: Option<String>,
    pub message_id: Option<String>,
    pub message_is_predefined: bool,
    pub icon: Option<String>,
    pub clear_at: Option<i64>,
    pub status: String,
    pub status_is_user_defined: bool,
}

/// Result of projecting the caller's status
///
/// Serializes to `{}` when there is no caller, otherwise to the flat
/// [`UserStatusView`] object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum StatusView {
    Anonymous {},
    User(UserStatusView),
}

impl StatusView {
    pub fn is_anonymous(&self) -> bool {
        matches!(self, Self::Anonymous {})
    }

    pub fn as_user(&self) -> Option<&UserStatusView> {
        match self {
            Self::User(view) => Some(view),
            Self::Anonymous {} => None,
        }
    }
}

/// Status of a user as seen by other users
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicStatusResponse {
    pub user_id: String,
    pub message: Option<String>,
    pub icon: Option<String>,
    pub clear_at: Option<i64>,
    pub status: String,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
