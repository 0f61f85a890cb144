//! Entity to model mappers
//!
//! - `From<UserStatusModel> for UserStatus`: convert database rows to domain objects
//! - [`UserStatusParams`]: borrow entity fields as bind parameters for inserts and updates

mod user_status;

pub use user_status::UserStatusParams;
