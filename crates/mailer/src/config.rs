//! Delivery credentials for notification email.

use crate::error::MailError;

/// Settings for the Resend delivery path.
///
/// All three values must be present for email to be enabled. The service
/// runs fine without them: inquiries are still stored, submissions just
/// report that no notification went out.
#[derive(Debug, Clone)]
pub struct MailerConfig {
    /// Resend API key (`RESEND_API_KEY`).
    pub api_key: String,
    /// Studio inbox receiving notifications (`CONTACT_NOTIFY_TO`).
    pub to: String,
    /// Verified sender address (`CONTACT_NOTIFY_FROM`).
    pub from: String,
}

impl MailerConfig {
    /// Load delivery credentials from the environment. Any missing or
    /// blank variable disables email delivery.
    pub fn from_env() -> Result<Self, MailError> {
        Ok(Self {
            api_key: require("RESEND_API_KEY")?,
            to: require("CONTACT_NOTIFY_TO")?,
            from: require("CONTACT_NOTIFY_FROM")?,
        })
    }
}

fn require(name: &'static str) -> Result<String, MailError> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .ok_or_else(|| MailError::NotConfigured(format!("{name} is not set")))
}
