//! Contact inquiry submission.

use axum::extract::{Request, State};
use axum::http::header::{HeaderName, REFERER, USER_AGENT};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;
use thrive_core::inquiry::{presence, validate_email, validate_name, Inquiry, InquiryRejection};
use thrive_mailer::SendReceipt;

use crate::extract::contact_payload;
use crate::state::AppState;

/// Outcome codes carried in submission responses.
pub mod codes {
    pub const INVALID_BODY: &str = "INVALID_BODY";
    pub const PERSIST_FAILED: &str = "PERSIST_FAILED";
    pub const EMAIL_SENT: &str = "EMAIL_SENT";
    pub const EMAIL_SKIPPED: &str = "EMAIL_SKIPPED";
    pub const EMAIL_FAILED: &str = "EMAIL_FAILED";
}

/// Envelope for an accepted submission. The inquiry is stored even when
/// the notification email cannot go out; `emailed` and `code` tell the
/// caller which path was taken.
#[derive(Debug, Serialize)]
struct SubmissionResponse {
    ok: bool,
    emailed: bool,
    code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<SendReceipt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

// ---------------------------------------------------------------------------
// POST /api/contact
// ---------------------------------------------------------------------------

/// Accepts a contact submission in any supported encoding, validates it,
/// persists the inquiry, and then attempts the notification email.
///
/// Ordering matters here: the row is written before the email is tried,
/// and a failed email never turns a stored submission into an error.
pub async fn submit_contact(State(state): State<AppState>, request: Request) -> Response {
    let user_agent = header_value(&request, USER_AGENT);
    let referer_header = header_value(&request, REFERER);

    let payload = match contact_payload(request).await {
        Ok(payload) => payload,
        Err(err) => {
            tracing::warn!(error = %err, "rejected unreadable contact submission");
            return reject(StatusCode::BAD_REQUEST, "Invalid request.", codes::INVALID_BODY);
        }
    };

    let name = payload.name.as_deref().unwrap_or("");
    if let Err(rejection) = validate_name(name) {
        return rejection_response(rejection);
    }
    let email = payload.email.as_deref().unwrap_or("");
    if let Err(rejection) = validate_email(email) {
        return rejection_response(rejection);
    }

    let inquiry = Inquiry {
        name: name.trim().to_string(),
        email: email.trim().to_string(),
        project_type: presence(payload.project_type.as_deref()),
        budget: presence(payload.budget.as_deref()),
        timeline: presence(payload.timeline.as_deref()),
        message: presence(payload.message.as_deref()),
        page_url: presence(payload.page_url.as_deref()),
        // An explicit referrer field wins over the Referer header.
        referrer: presence(payload.referrer.as_deref()).or(referer_header),
        user_agent,
    };

    if let Err(err) = state.inquiries.insert_inquiry(&inquiry).await {
        tracing::error!(error = %err, "failed to persist contact inquiry");
        return reject(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to submit. Try again.",
            codes::PERSIST_FAILED,
        );
    }

    tracing::info!(email = %inquiry.email, "contact inquiry stored");

    let (emailed, code, data, details) = match state.mailer.send_inquiry_notification(&inquiry).await
    {
        Ok(receipt) => (true, codes::EMAIL_SENT, Some(receipt), None),
        Err(err) if err.is_not_configured() => {
            tracing::warn!(error = %err, "notification email skipped");
            (false, codes::EMAIL_SKIPPED, None, None)
        }
        Err(err) => {
            tracing::error!(error = %err, "notification email failed");
            (false, codes::EMAIL_FAILED, None, Some(err.to_string()))
        }
    };

    Json(SubmissionResponse {
        ok: true,
        emailed,
        code,
        data,
        details,
    })
    .into_response()
}

fn header_value(request: &Request, name: HeaderName) -> Option<String> {
    request
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

fn rejection_response(rejection: InquiryRejection) -> Response {
    reject(
        StatusCode::BAD_REQUEST,
        &rejection.to_string(),
        rejection.code(),
    )
}

fn reject(status: StatusCode, message: &str, code: &str) -> Response {
    (status, Json(json!({ "error": message, "code": code }))).into_response()
}
