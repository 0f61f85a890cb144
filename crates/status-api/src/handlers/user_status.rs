//! Own status handlers
//!
//! Endpoints for reading and changing the caller's status.

use axum::{extract::State, Json};
use status_service::{
    SetCustomMessageRequest, SetPredefinedMessageRequest, SetStatusRequest,
    StatusProjectionService, StatusService, StatusView, UserStatusView,
};

use crate::extractors::{AuthUser, OptionalAuthUser, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Get the caller's status
///
/// GET /user_status
///
/// Answers `{}` when the request carries no bearer token.
pub async fn get_user_status(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
) -> ApiResult<Json<StatusView>> {
    let service = StatusProjectionService::new(state.service_context());
    let view = service.project(&auth.context()).await?;
    Ok(Json(view))
}

/// Change the caller's availability status
///
/// PUT /user_status/status
pub async fn set_status(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<SetStatusRequest>,
) -> ApiResult<Json<UserStatusView>> {
    let service = StatusService::new(state.service_context());
    let view = service
        .set_status(&auth.user_id, &request.status_type, true)
        .await?;
    Ok(Json(view))
}

/// Set a message from the predefined catalog
///
/// PUT /user_status/message/predefined
pub async fn set_predefined_message(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<SetPredefinedMessageRequest>,
) -> ApiResult<Json<UserStatusView>> {
    let service = StatusService::new(state.service_context());
    let view = service.set_predefined_message(&auth.user_id, request).await?;
    Ok(Json(view))
}

/// Set a custom message and/or icon
///
/// PUT /user_status/message/custom
pub async fn set_custom_message(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<SetCustomMessageRequest>,
) -> ApiResult<Json<UserStatusView>> {
    let service = StatusService::new(state.service_context());
    let view = service.set_custom_message(&auth.user_id, request).await?;
    Ok(Json(view))
}

/// Clear the caller's message, keeping the status
///
/// DELETE /user_status/message
pub async fn clear_message(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<UserStatusView>> {
    let service = StatusService::new(state.service_context());
    let view = service.clear_message(&auth.user_id).await?;
    Ok(Json(view))
}

/// Delete the caller's status record
///
/// DELETE /user_status
pub async fn remove_status(State(state): State<AppState>, auth: AuthUser) -> ApiResult<NoContent> {
    let service = StatusService::new(state.service_context());
    service.remove_status(&auth.user_id).await?;
    Ok(NoContent)
}
