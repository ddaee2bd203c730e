//! Storage error types.

use thiserror::Error;

/// Store operation errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Deserialization error
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// A write would duplicate a constrained key. Carries the column
    /// family name so callers can tell which constraint fired.
    #[error("Unique constraint violated in {0}")]
    UniqueViolation(String),

    /// A write referenced a row that does not exist
    #[error("Referential integrity violated: missing parent row in {0}")]
    ForeignKeyViolation(String),

    /// Invalid column family
    #[error("Invalid column family: {0}")]
    InvalidColumnFamily(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
