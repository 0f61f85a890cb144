//! Repository implementations
//!
//! Implementations of the `UserStatusRepository` trait defined in status-core.

mod error;
mod memory;
mod user_status;

pub use memory::InMemoryUserStatusRepository;
pub use user_status::PgUserStatusRepository;

/// Storage namespace shared by every backend
pub const USER_STATUS_TABLE: &str = "user_status";
