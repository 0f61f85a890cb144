//! User status database model

use sqlx::FromRow;

/// Database model for the user_status table
#[derive(Debug, Clone, FromRow)]
pub struct UserStatusModel {
    /// Surrogate key; defines insertion order for listings
    pub id: i64,
    pub user_id: String,
    pub status: String,
    pub status_timestamp: i64,
    pub is_user_defined: bool,
    pub message_id: Option<String>,
    pub custom_icon: Option<String>,
    pub custom_message: Option<String>,
    pub clear_at: Option<i64>,
}
