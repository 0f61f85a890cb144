//! User status entity <-> model mapper

use status_core::UserStatus;

use crate::models::UserStatusModel;

/// Convert UserStatusModel to UserStatus entity
impl From<UserStatusModel> for UserStatus {
    fn from(model: UserStatusModel) -> Self {
        UserStatus {
            user_id: model.user_id,
            status: model.status,
            status_timestamp: model.status_timestamp,
            is_user_defined: model.is_user_defined,
            custom_message: model.custom_message,
            custom_icon: model.custom_icon,
            message_id: model.message_id,
            clear_at: model.clear_at,
        }
    }
}

/// Entity values borrowed for binding, in column order
pub struct UserStatusParams<'a> {
    pub user_id: &'a str,
    pub status: &'a str,
    pub status_timestamp: i64,
    pub is_user_defined: bool,
    pub message_id: Option<&'a str>,
    pub custom_icon: Option<&'a str>,
    pub custom_message: Option<&'a str>,
    pub clear_at: Option<i64>,
}

impl<'a> UserStatusParams<'a> {
    pub fn new(status: &'a UserStatus) -> Self {
        Self {
            user_id: &status.user_id,
            status: &status.status,
            status_timestamp: status.status_timestamp,
            is_user_defined: status.is_user_defined,
            message_id: status.message_id.as_deref(),
            custom_icon: status.custom_icon.as_deref(),
            custom_message: status.custom_message.as_deref(),
            clear_at: status.clear_at,
        }
    }
}
