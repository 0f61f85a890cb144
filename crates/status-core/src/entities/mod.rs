//! Domain entities - core business objects

mod predefined_status;
mod user_status;

pub use predefined_status::{ClearAtPolicy, PredefinedStatus, PREDEFINED_STATUSES};
pub use user_status::UserStatus;
