//! Errors from the content store layer.

use thiserror::Error;

/// Errors surfaced by [`crate::SupabaseStore`] calls.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("store request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The store answered with a non-2xx status code.
    #[error("store API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The call needed a credential that is not configured.
    #[error("store is not configured: {0}")]
    Config(String),
}
