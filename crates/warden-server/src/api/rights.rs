use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;
use warden_registry::Right;

use crate::{error::ApiError, extractors::BearerToken, state::AppState};

/// Unrecognized right names map to 404 before reaching the core
fn parse_right(name: &str) -> Result<Right, ApiError> {
    name.parse()
        .map_err(|_| ApiError::NotFound(format!("no right named {name}")))
}

/// POST /users/:username/rights/:right
///
/// Requires a session whose owner holds `AdminRights`.
pub async fn grant_right(
    State(state): State<Arc<AppState>>,
    BearerToken(token): BearerToken,
    Path((username, right)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    let right = parse_right(&right)?;
    state.rights.grant(&username, right, &token).await?;

    Ok(StatusCode::OK)
}

/// DELETE /users/:username/rights/:right
///
/// Requires a session whose owner holds `AdminRights`.
pub async fn revoke_right(
    State(state): State<Arc<AppState>>,
    BearerToken(token): BearerToken,
    Path((username, right)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    let right = parse_right(&right)?;
    state.rights.revoke(&username, right, &token).await?;

    Ok(StatusCode::OK)
}

/// GET /users/:username/rights/:right
///
/// 200 when the user holds the right, 404 otherwise.
pub async fn check_right(
    State(state): State<Arc<AppState>>,
    Path((username, right)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    let right = parse_right(&right)?;

    if state.validator.has_right(&username, right).await? {
        Ok(StatusCode::OK)
    } else {
        Err(ApiError::NotFound(format!(
            "{username} does not hold {right}"
        )))
    }
}
