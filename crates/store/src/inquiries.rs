//! Inquiry persistence against the `contact_inquiries` table.

use async_trait::async_trait;
use serde::Serialize;
use thrive_core::inquiry::{Inquiry, STATUS_NEW};

use crate::client::SupabaseStore;
use crate::error::StoreError;
use crate::ports::InquiryStore;

/// Insert payload for the `contact_inquiries` table. Optional fields the
/// visitor left blank are `None` here and land as SQL `NULL`; `id` and
/// `created_at` are filled in by the database.
#[derive(Debug, Serialize)]
struct InquiryRow<'a> {
    name: &'a str,
    email: &'a str,
    project_type: Option<&'a str>,
    budget: Option<&'a str>,
    timeline: Option<&'a str>,
    message: Option<&'a str>,
    page_url: Option<&'a str>,
    referrer: Option<&'a str>,
    user_agent: Option<&'a str>,
    status: &'static str,
}

impl<'a> From<&'a Inquiry> for InquiryRow<'a> {
    fn from(inquiry: &'a Inquiry) -> Self {
        Self {
            name: &inquiry.name,
            email: &inquiry.email,
            project_type: inquiry.project_type.as_deref(),
            budget: inquiry.budget.as_deref(),
            timeline: inquiry.timeline.as_deref(),
            message: inquiry.message.as_deref(),
            page_url: inquiry.page_url.as_deref(),
            referrer: inquiry.referrer.as_deref(),
            user_agent: inquiry.user_agent.as_deref(),
            status: STATUS_NEW,
        }
    }
}

#[async_trait]
impl InquiryStore for SupabaseStore {
    /// Sends a `POST /rest/v1/contact_inquiries` request with
    /// `Prefer: return=minimal`, so a successful insert answers with an
    /// empty body.
    async fn insert_inquiry(&self, inquiry: &Inquiry) -> Result<(), StoreError> {
        let row = InquiryRow::from(inquiry);
        let response = self
            .rest_post_privileged("contact_inquiries")?
            .header("Prefer", "return=minimal")
            .json(&row)
            .send()
            .await?;
        Self::check_status(response).await
    }
}
