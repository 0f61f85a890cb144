//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use status_core::{StatusType, UserStatus};

use super::responses::{PublicStatusResponse, StatusView, UserStatusView};

impl UserStatusView {
    /// View of a user who has never set a status
    pub fn offline(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            message: None,
            message_id: None,
            message_is_predefined: false,
            icon: None,
            clear_at: None,
            status: StatusType::Offline.as_str().to_string(),
            status_is_user_defined: false,
        }
    }
}

impl From<&UserStatus> for UserStatusView {
    fn from(status: &UserStatus) -> Self {
        Self {
            user_id: status.user_id.clone(),
            message: status.custom_message.clone(),
            message_id: status.message_id.clone(),
            message_is_predefined: status.is_predefined_message(),
            icon: status.custom_icon.clone(),
            clear_at: status.clear_at,
            status: status.status.clone(),
            status_is_user_defined: status.is_user_defined,
        }
    }
}

impl From<UserStatus> for UserStatusView {
    fn from(status: UserStatus) -> Self {
        Self::from(&status)
    }
}

impl From<UserStatusView> for StatusView {
    fn from(view: UserStatusView) -> Self {
        Self::User(view)
    }
}

impl From<&UserStatus> for PublicStatusResponse {
    fn from(status: &UserStatus) -> Self {
        // Unknown stored values are passed through as-is
        let public_status = status
            .status_type()
            .map_or_else(|| status.status.clone(), |s| s.public().as_str().to_string());

        Self {
            user_id: status.user_id.clone(),
            message: status.custom_message.clone(),
            icon: status.custom_icon.clone(),
            clear_at: status.clear_at,
            status: public_status,
        }
    }
}

impl From<UserStatus> for PublicStatusResponse {
    fn from(status: UserStatus) -> Self {
        Self::from(&status)
    }
}
