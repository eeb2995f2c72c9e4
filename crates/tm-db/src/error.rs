//! Error types for tm-db

use thiserror::Error;

/// Backend and synchronization errors
#[derive(Error, Debug)]
pub enum DbError {
    /// Backend connection or initialization failure (D001)
    #[error("[D001] Backend init failed: {0}")]
    ConnectionError(String),

    /// Migration unit execution failure (D002)
    #[error("[D002] Migration execution failed: {0}")]
    ExecutionError(String),

    /// Applied-set bookkeeping failure (D003)
    #[error("[D003] Applied-set tracking failed: {0}")]
    TrackingError(String),
}

/// Result type alias for DbError
pub type DbResult<T> = Result<T, DbError>;
