//! Route definitions
//!
//! Status routes mounted under /api/v1, health routes at the root.

use axum::{
    routing::{delete, get, put},
    Router,
};

use crate::handlers::{health, predefined, statuses, user_status};
use crate::state::AppState;

/// Create the main API router (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(user_status_routes())
        .merge(status_routes())
}

/// The caller's own status
fn user_status_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/user_status",
            get(user_status::get_user_status).delete(user_status::remove_status),
        )
        .route("/user_status/status", put(user_status::set_status))
        .route("/user_status/message", delete(user_status::clear_message))
        .route(
            "/user_status/message/predefined",
            put(user_status::set_predefined_message),
        )
        .route(
            "/user_status/message/custom",
            put(user_status::set_custom_message),
        )
}

/// Other users' statuses and the predefined catalog
fn status_routes() -> Router<AppState> {
    Router::new()
        .route("/statuses", get(statuses::list_statuses))
        .route("/statuses/:user_id", get(statuses::get_status))
        .route(
            "/predefined_statuses",
            get(predefined::list_predefined_statuses),
        )
}
