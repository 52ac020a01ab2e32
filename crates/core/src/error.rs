//! Error types shared across the backend crates.

use thiserror::Error;

/// Domain-level failures that are independent of any transport or storage
/// backend. The API crate maps these onto HTTP status codes.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A lookup keyed by a stable identifier found nothing.
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    /// Input failed a domain validation rule.
    #[error("validation failed: {0}")]
    Validation(String),
}

impl CoreError {
    pub fn not_found(entity: &'static str, key: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            key: key.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
