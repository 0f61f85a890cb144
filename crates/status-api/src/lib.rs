//! # status-api
//!
//! REST API server for user statuses built with the Axum framework.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_with_config, run};
pub use state::AppState;
