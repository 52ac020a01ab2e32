//! Outbound notification email.
//!
//! Sends the studio an email for every stored inquiry via the Resend
//! HTTP API. Delivery is strictly best-effort: the caller decides what a
//! failed or unconfigured send means, this crate only reports it.

pub mod config;
pub mod error;
pub mod resend;
pub mod template;

pub use config::MailerConfig;
pub use error::MailError;
pub use resend::ResendMailer;
pub use template::InquiryEmail;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thrive_core::inquiry::Inquiry;

/// Identifier of an accepted message, echoed back by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendReceipt {
    pub id: String,
}

/// Sends inquiry notifications to the studio inbox.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Renders and sends the notification for a stored inquiry. The
    /// reply-to header is set to the visitor's address so the studio can
    /// answer directly.
    async fn send_inquiry_notification(&self, inquiry: &Inquiry) -> Result<SendReceipt, MailError>;
}
