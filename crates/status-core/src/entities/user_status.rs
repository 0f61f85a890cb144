//! User status entity - the single current status record of a user

use crate::entities::PredefinedStatus;
use crate::value_objects::StatusType;

/// Current status of one user
///
/// At most one record exists per `user_id`. The `status` column is stored as an
/// opaque string; use [`UserStatus::status_type`] to interpret it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStatus {
    pub user_id: String,
    pub status: String,
    /// Epoch seconds of the last status change
    pub status_timestamp: i64,
    pub is_user_defined: bool,
    pub custom_message: Option<String>,
    pub custom_icon: Option<String>,
    /// Id of the predefined status the message was taken from
    pub message_id: Option<String>,
    /// Epoch seconds after which the custom message expires
    pub clear_at: Option<i64>,
}

impl UserStatus {
    /// Create a status record without any custom message
    pub fn new(
        user_id: impl Into<String>,
        status: impl Into<String>,
        status_timestamp: i64,
        is_user_defined: bool,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            status: status.into(),
            status_timestamp,
            is_user_defined,
            custom_message: None,
            custom_icon: None,
            message_id: None,
            clear_at: None,
        }
    }

    /// Record for a user who has never set anything explicitly
    pub fn offline(user_id: impl Into<String>, status_timestamp: i64) -> Self {
        Self::new(user_id, StatusType::Offline.as_str(), status_timestamp, false)
    }

    #[must_use]
    pub fn with_custom_message(mut self, message: impl Into<String>) -> Self {
        self.custom_message = Some(message.into());
        self
    }

    #[must_use]
    pub fn with_custom_icon(mut self, icon: impl Into<String>) -> Self {
        self.custom_icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn with_message_id(mut self, message_id: impl Into<String>) -> Self {
        self.message_id = Some(message_id.into());
        self
    }

    #[must_use]
    pub fn with_clear_at(mut self, clear_at: i64) -> Self {
        self.clear_at = Some(clear_at);
        self
    }

    /// Parsed status, or `None` if the stored value is not a known status type
    pub fn status_type(&self) -> Option<StatusType> {
        self.status.parse().ok()
    }

    /// Whether the message was taken from the predefined catalog
    #[inline]
    pub fn is_predefined_message(&self) -> bool {
        self.message_id.is_some()
    }

    /// Whether any custom message field is set
    pub fn has_custom_message(&self) -> bool {
        self.custom_message.is_some()
            || self.custom_icon.is_some()
            || self.message_id.is_some()
            || self.clear_at.is_some()
    }

    /// Whether the custom message is due for removal at `now`
    ///
    /// Uses the same strict comparison as the storage sweep: a record whose
    /// `clear_at` equals `now` is not yet expired.
    pub fn is_message_expired(&self, now: i64) -> bool {
        self.clear_at.is_some_and(|clear_at| clear_at < now)
    }

    /// Change the status and stamp the change time
    pub fn set_status(&mut self, status: StatusType, now: i64, is_user_defined: bool) {
        self.status = status.as_str().to_string();
        self.status_timestamp = now;
        self.is_user_defined = is_user_defined;
    }

    /// Replace the message with one from the predefined catalog
    pub fn set_predefined_message(&mut self, predefined: &PredefinedStatus, clear_at: Option<i64>) {
        self.message_id = Some(predefined.id.to_string());
        self.custom_message = Some(predefined.message.to_string());
        self.custom_icon = Some(predefined.icon.to_string());
        self.clear_at = clear_at;
    }

    /// Replace the message with free text and/or an icon
    pub fn set_custom_message(
        &mut self,
        icon: Option<String>,
        message: Option<String>,
        clear_at: Option<i64>,
    ) {
        self.message_id = None;
        self.custom_icon = icon;
        self.custom_message = message;
        self.clear_at = clear_at;
    }

    /// Remove message, icon, template id and expiry; status is kept
    pub fn clear_message(&mut self) {
        self.custom_message = None;
        self.custom_icon = None;
        self.message_id = None;
        self.clear_at = None;
    }
}
