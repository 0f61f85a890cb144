//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Field names are camelCase on the wire.

use serde::Deserialize;
use validator::Validate;

/// Maximum length of a custom status message, in characters
pub const MAX_MESSAGE_LENGTH: usize = 80;

/// Change the availability status of the caller
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SetStatusRequest {
    #[validate(length(min = 1, max = 32, message = "Status type must be 1-32 characters"))]
    pub status_type: String,
}

/// Pick a message from the predefined catalog
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SetPredefinedMessageRequest {
    #[validate(length(min = 1, max = 64, message = "Message id must be 1-64 characters"))]
    pub message_id: String,

    /// Overrides the catalog's clear-at policy when present
    #[serde(default)]
    pub clear_at: Option<i64>,
}

/// Set a free-text message and/or icon
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SetCustomMessageRequest {
    #[serde(default)]
    pub status_icon: Option<String>,

    /// Trimmed and checked against [`MAX_MESSAGE_LENGTH`] by the service
    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub clear_at: Option<i64>,
}
