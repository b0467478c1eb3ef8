//! Database error types for welfare-db.

use thiserror::Error;
use welfare_core::engine::ValidationError;
use welfare_core::errors::CoreError;

/// Errors from database and storage operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration or questionnaire seeding failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Invalid state encountered (e.g., bad data in DB).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// The submitted response set was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Entity not found or entity fields rejected.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Photo storage I/O failed.
    #[error("Storage error: {0}")]
    Io(#[from] std::io::Error),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DatabaseError {
    pub(crate) fn not_found(entity_type: &str, id: &str) -> Self {
        Self::Core(CoreError::NotFound {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        })
    }

    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::Core(CoreError::Validation(reason.into()))
    }

    /// Whether the error reports a missing entity.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Core(CoreError::NotFound { .. }))
    }
}
