//! Repository traits

mod repositories;

pub use repositories::{PageRequest, RepoResult, UserStatusRepository};
