//! Resend HTTP API client.
//!
//! Talks directly to `POST /emails` with bearer auth. Only the handful
//! of fields the notification needs are modeled.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use thrive_core::inquiry::Inquiry;

use crate::config::MailerConfig;
use crate::error::MailError;
use crate::template::InquiryEmail;
use crate::{Mailer, SendReceipt};

/// Resend send endpoint.
pub const RESEND_API_URL: &str = "https://api.resend.com/emails";

/// Timeout applied to every send.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Request payload for the Resend send endpoint.
#[derive(Debug, Serialize)]
struct OutboundEmail<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: &'a str,
    text: &'a str,
    reply_to: &'a str,
}

/// [`Mailer`] backed by the Resend HTTP API.
///
/// Delivery credentials are re-read from the environment on every send,
/// so operators can enable or rotate them without a restart. A send with
/// incomplete credentials returns [`MailError::NotConfigured`] without
/// touching the network.
pub struct ResendMailer {
    client: reqwest::Client,
}

impl ResendMailer {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("HTTP client must build");
        Self { client }
    }
}

impl Default for ResendMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send_inquiry_notification(&self, inquiry: &Inquiry) -> Result<SendReceipt, MailError> {
        let config = MailerConfig::from_env()?;

        let email = InquiryEmail::new(inquiry);
        let body = OutboundEmail {
            from: &config.from,
            to: &config.to,
            subject: &email.subject,
            html: &email.html,
            text: &email.text,
            reply_to: &inquiry.email,
        };

        let response = self
            .client
            .post(RESEND_API_URL)
            .bearer_auth(&config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(MailError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json::<SendReceipt>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outbound_payload_matches_wire_format() {
        let body = OutboundEmail {
            from: "Thrive <hello@thrive.example>",
            to: "studio@thrive.example",
            subject: "New Thrive inquiry \u{2014} Dana (Brand)",
            html: "<div>hi</div>",
            text: "hi",
            reply_to: "dana@client.example",
        };
        let value = serde_json::to_value(&body).expect("serializes");
        assert_eq!(value["from"], "Thrive <hello@thrive.example>");
        assert_eq!(value["to"], "studio@thrive.example");
        assert_eq!(value["reply_to"], "dana@client.example");
        assert!(value["subject"]
            .as_str()
            .expect("subject is a string")
            .starts_with("New Thrive inquiry"));
    }
}
