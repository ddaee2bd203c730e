use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{error::ApiError, extractors::BearerToken, state::AppState};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub session_id: String,
}

/// POST /sessions
///
/// Exchanges credentials for a session token. Wrong credentials map to
/// 401 rather than revealing whether the user exists.
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let session_id = state.sessions.login(&req.username, &req.password).await?;

    Ok(Json(LoginResponse { session_id }))
}

/// DELETE /sessions
pub async fn logout(
    State(state): State<Arc<AppState>>,
    BearerToken(token): BearerToken,
) -> Result<StatusCode, ApiError> {
    state.sessions.logout(&token).await?;

    Ok(StatusCode::OK)
}
