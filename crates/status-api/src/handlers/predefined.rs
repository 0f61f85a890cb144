//! Predefined status catalog handler

use axum::Json;
use status_core::{PredefinedStatus, PREDEFINED_STATUSES};

/// List the predefined status messages
///
/// GET /predefined_statuses
pub async fn list_predefined_statuses() -> Json<&'static [PredefinedStatus]> {
    let catalog: &'static [PredefinedStatus] = &PREDEFINED_STATUSES;
    Json(catalog)
}
