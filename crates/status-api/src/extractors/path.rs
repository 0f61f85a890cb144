//! Path parameter extractors

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::Deserialize;

use crate::response::ApiError;

/// Longest user id the store accepts
const MAX_USER_ID_LENGTH: usize = 255;

/// `:user_id` path segment, rejected when empty or too long
#[derive(Debug, Clone)]
pub struct UserIdPath(pub String);

#[derive(Deserialize)]
struct RawUserIdPath {
    user_id: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for UserIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<RawUserIdPath>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;

        if raw.user_id.is_empty() || raw.user_id.len() > MAX_USER_ID_LENGTH {
            return Err(ApiError::invalid_path("Invalid user_id"));
        }

        Ok(UserIdPath(raw.user_id))
    }
}
