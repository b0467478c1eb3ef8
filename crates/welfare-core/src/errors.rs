//! Cross-cutting error types.
//!
//! Domain-specific errors (`DatabaseError`, `ConfigError`) live in their own
//! crates. Response-set validation failures are reported by
//! [`ValidationError`](crate::engine::validation::ValidationError).

use thiserror::Error;

/// Errors that can be raised by any crate in the workspace.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (blank fields, out-of-range values).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
