//! Public status handlers
//!
//! Endpoints for reading other users' statuses.

use axum::{extract::State, Json};
use status_service::{PublicStatusResponse, StatusService};

use crate::extractors::{Pagination, UserIdPath};
use crate::response::ApiResult;
use crate::state::AppState;

/// List statuses in storage order
///
/// GET /statuses?limit&offset
pub async fn list_statuses(
    State(state): State<AppState>,
    pagination: Pagination,
) -> ApiResult<Json<Vec<PublicStatusResponse>>> {
    let service = StatusService::new(state.service_context());
    let statuses = service.find_all(pagination.page()).await?;
    Ok(Json(statuses))
}

/// Get the status of one user
///
/// GET /statuses/{user_id}
pub async fn get_status(
    State(state): State<AppState>,
    UserIdPath(user_id): UserIdPath,
) -> ApiResult<Json<PublicStatusResponse>> {
    let service = StatusService::new(state.service_context());
    let status = service.find_by_user_id(&user_id).await?;
    Ok(Json(status))
}
