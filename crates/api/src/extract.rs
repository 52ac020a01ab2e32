//! Tolerant contact-form body extraction.
//!
//! The form has shipped in several incarnations: a JSON fetch, a plain
//! HTML form post (urlencoded), and a multipart variant. All of them
//! must produce the same logical payload before validation, and a body
//! that is not parseable as any of those is kept as raw message text
//! rather than bounced.

use axum::body::to_bytes;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;
use serde::Deserialize;
use thiserror::Error;

/// Upper bound on submission body size. Form submissions are small;
/// anything bigger is rejected before parsing.
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Raw submitted fields, prior to trimming and validation. Field names
/// are accepted in both camelCase and snake_case spellings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(alias = "projectType")]
    pub project_type: Option<String>,
    pub budget: Option<String>,
    pub timeline: Option<String>,
    pub message: Option<String>,
    #[serde(alias = "pageUrl")]
    pub page_url: Option<String>,
    pub referrer: Option<String>,
}

impl ContactPayload {
    /// Assigns a form field by name. Unknown fields are ignored.
    fn set_field(&mut self, name: &str, value: String) {
        match name {
            "name" => self.name = Some(value),
            "email" => self.email = Some(value),
            "projectType" | "project_type" => self.project_type = Some(value),
            "budget" => self.budget = Some(value),
            "timeline" => self.timeline = Some(value),
            "message" => self.message = Some(value),
            "pageUrl" | "page_url" => self.page_url = Some(value),
            "referrer" => self.referrer = Some(value),
            _ => {}
        }
    }
}

/// Why a submission body could not be turned into a payload.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("body could not be read: {0}")]
    Body(String),
    #[error("multipart decode failed: {0}")]
    Multipart(String),
    #[error("body is not valid UTF-8")]
    NotUtf8,
}

/// Extract a [`ContactPayload`] from a request of any supported
/// encoding.
///
/// Dispatches on the `Content-Type` header: multipart forms decode
/// field-by-field, urlencoded bodies decode as a form, and everything
/// else is tried as JSON. Any non-multipart body that fails to decode
/// is kept whole as the message text.
pub async fn contact_payload(request: Request) -> Result<ContactPayload, ExtractError> {
    let content_type = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
        .to_ascii_lowercase();

    if content_type.starts_with("multipart/form-data") {
        return from_multipart(request).await;
    }

    let bytes = to_bytes(request.into_body(), MAX_BODY_BYTES)
        .await
        .map_err(|err| ExtractError::Body(err.to_string()))?;

    if content_type.starts_with("application/x-www-form-urlencoded") {
        match serde_urlencoded::from_bytes(&bytes) {
            Ok(payload) => return Ok(payload),
            Err(err) => {
                // Fall through and keep the body as message text.
                tracing::debug!(error = %err, "urlencoded decode failed");
            }
        }
    }

    match serde_json::from_slice::<ContactPayload>(&bytes) {
        Ok(payload) => Ok(payload),
        Err(_) => {
            let text = std::str::from_utf8(&bytes).map_err(|_| ExtractError::NotUtf8)?;
            Ok(ContactPayload {
                message: Some(text.to_string()),
                ..ContactPayload::default()
            })
        }
    }
}

async fn from_multipart(request: Request) -> Result<ContactPayload, ExtractError> {
    let mut multipart = Multipart::from_request(request, &())
        .await
        .map_err(|err| ExtractError::Multipart(err.to_string()))?;

    let mut payload = ContactPayload::default();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| ExtractError::Multipart(err.to_string()))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        let value = field
            .text()
            .await
            .map_err(|err| ExtractError::Multipart(err.to_string()))?;
        payload.set_field(&name, value);
    }
    Ok(payload)
}
