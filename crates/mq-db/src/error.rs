//! Database error types for mq-db.

use thiserror::Error;

/// Errors from database and derived-layer operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Caller supplied input that cannot be acted on (e.g., an override with
    /// neither html nor a source date).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid state encountered (e.g., bad data in the DB).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
