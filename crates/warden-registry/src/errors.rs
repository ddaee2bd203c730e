//! Registry error types.

use thiserror::Error;
use warden_storage::StoreError;

/// Errors surfaced by the directory and the registries
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A required input was missing or empty
    #[error("Invalid input: {0}")]
    InvalidInput(&'static str),

    /// Attempt to create a user that already exists
    #[error("A user named {0} already exists")]
    UserExists(String),

    /// An operation referenced a username that does not exist
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// The session token is unknown or the session is inactive
    #[error("Session not found or inactive")]
    SessionNotFound,

    /// An active session already exists for the user
    ///
    /// Conflict signal for concurrent logins racing on the
    /// active-session index; callers resolve it by reusing the surviving
    /// session. Never surfaced past the access layer.
    #[error("An active session already exists for {0}")]
    ActiveSessionExists(String),

    /// The active-session index disagrees with the session records
    #[error("Session store inconsistency: {0}")]
    Inconsistent(String),

    /// Store error
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;
