//! Test fixtures and data generators
//!
//! Request bodies and response shapes as seen on the wire.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// A user id no other test uses
pub fn unique_user_id() -> String {
    format!("user{}", unique_suffix())
}

/// Clock value every test server starts at (2024-01-01T12:00:00Z)
pub const TEST_NOW: i64 = 1_704_110_400;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetStatusBody {
    pub status_type: String,
}

impl SetStatusBody {
    pub fn new(status_type: &str) -> Self {
        Self {
            status_type: status_type.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetPredefinedBody {
    pub message_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clear_at: Option<i64>,
}

impl SetPredefinedBody {
    pub fn new(message_id: &str) -> Self {
        Self {
            message_id: message_id.to_string(),
            clear_at: None,
        }
    }
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetCustomBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clear_at: Option<i64>,
}

impl SetCustomBody {
    pub fn new(icon: &str, message: &str) -> Self {
        Self {
            status_icon: Some(icon.to_string()),
            message: Some(message.to_string()),
            clear_at: None,
        }
    }

    pub fn clear_at(mut self, clear_at: i64) -> Self {
        self.clear_at = Some(clear_at);
        self
    }
}

/// The caller's own status
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStatusBody {
    pub user_id: String,
    pub message: Option<String>,
    pub message_id: Option<String>,
    pub message_is_predefined: bool,
    pub icon: Option<String>,
    pub clear_at: Option<i64>,
    pub status: String,
    pub status_is_user_defined: bool,
}

/// Another user's status
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicStatusBody {
    pub user_id: String,
    pub message: Option<String>,
    pub icon: Option<String>,
    pub clear_at: Option<i64>,
    pub status: String,
}

/// Catalog entry
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredefinedStatusBody {
    pub id: String,
    pub icon: String,
    pub message: String,
}

/// Error envelope
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBodyDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBodyDetail {
    pub code: String,
    pub message: String,
}
