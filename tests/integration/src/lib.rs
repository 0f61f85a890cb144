//! Integration test utilities for the user status server
//!
//! Spawns the full HTTP application on an ephemeral port, backed by the
//! in-memory repository and a controllable clock.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
