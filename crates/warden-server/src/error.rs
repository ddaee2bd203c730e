use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use warden_access::AccessError;
use warden_registry::RegistryError;

/// API error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetails,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
}

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, "INVALID_REQUEST", msg),
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Missing or invalid credentials".to_string(),
            ),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg),
            ApiError::Internal(err) => {
                tracing::error!("Internal error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: ErrorDetails {
                code: code.to_string(),
                message,
            },
        });

        (status, body).into_response()
    }
}

impl From<AccessError> for ApiError {
    fn from(error: AccessError) -> Self {
        match error {
            AccessError::InvalidCredentials | AccessError::InsufficientRights => {
                ApiError::Unauthorized
            }
            AccessError::Registry(inner) => inner.into(),
        }
    }
}

impl From<RegistryError> for ApiError {
    fn from(error: RegistryError) -> Self {
        match error {
            RegistryError::InvalidInput(msg) => ApiError::InvalidRequest(msg.to_string()),
            RegistryError::UserExists(username) => {
                ApiError::Conflict(format!("a user named {username} already exists"))
            }
            RegistryError::UserNotFound(username) => {
                ApiError::NotFound(format!("no user named {username}"))
            }
            RegistryError::SessionNotFound => ApiError::Unauthorized,
            err => ApiError::Internal(anyhow::anyhow!(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(error: AccessError) -> StatusCode {
        ApiError::from(error).into_response().status()
    }

    #[test]
    fn test_domain_errors_map_to_reference_status_codes() {
        assert_eq!(
            status_of(RegistryError::InvalidInput("a username is required").into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AccessError::InvalidCredentials),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(AccessError::InsufficientRights),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(RegistryError::SessionNotFound.into()),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(RegistryError::UserNotFound("ghost".to_string()).into()),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(RegistryError::UserExists("alice".to_string()).into()),
            StatusCode::CONFLICT
        );
    }
}
