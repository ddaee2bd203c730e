//! Access layer error types.

use thiserror::Error;
use warden_registry::RegistryError;

/// Errors surfaced by the managers and the rights validator
#[derive(Debug, Error)]
pub enum AccessError {
    /// Login with a wrong username or password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The session holder lacks a required right
    ///
    /// Deliberately names no right, so an unauthorized caller learns
    /// nothing about the rights model.
    #[error("Insufficient rights")]
    InsufficientRights,

    /// Registry error
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),
}

/// Result type for access layer operations
pub type Result<T> = std::result::Result<T, AccessError>;
