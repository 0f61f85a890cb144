//! Database models - SQLx-compatible structs for PostgreSQL tables

mod user_status;

pub use user_status::UserStatusModel;
