use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use std::sync::Arc;

use crate::{error::ApiError, extractors::BearerToken, state::AppState};

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
}

/// POST /users
///
/// Requires a session whose owner holds `AdminUsers`.
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    BearerToken(token): BearerToken,
    Json(req): Json<CreateUserRequest>,
) -> Result<StatusCode, ApiError> {
    state
        .users
        .create_user(&req.username, &req.password, &token)
        .await?;

    Ok(StatusCode::OK)
}
