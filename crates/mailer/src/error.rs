//! Errors from the notification email layer.

use thiserror::Error;

/// Errors surfaced by [`crate::Mailer`] implementations.
#[derive(Debug, Error)]
pub enum MailError {
    /// Delivery credentials are missing, so no send was attempted.
    #[error("notification email is not configured: {0}")]
    NotConfigured(String),

    /// The HTTP request to the provider failed (network, DNS, TLS,
    /// timeout).
    #[error("email request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider answered with a non-2xx status code.
    #[error("email API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl MailError {
    /// True when the send failed because delivery is not set up, as
    /// opposed to an attempted send going wrong.
    pub fn is_not_configured(&self) -> bool {
        matches!(self, Self::NotConfigured(_))
    }
}
