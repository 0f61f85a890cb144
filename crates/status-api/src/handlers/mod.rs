//! Route handlers
//!
//! All HTTP request handlers organized by resource.

pub mod health;
pub mod predefined;
pub mod statuses;
pub mod user_status;
