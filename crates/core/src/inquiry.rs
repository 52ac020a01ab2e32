//! Contact inquiry domain types and validation.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Status assigned to every inquiry at submission time. Later stages of
/// triage (replied, archived) update this column out of band.
pub const STATUS_NEW: &str = "new";

/// Shape check applied to submitted addresses: something before the `@`,
/// something after it, and a dot in the domain part. No whitespace anywhere.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex"));

/// Placeholder rendered in notification emails for fields the visitor left
/// blank. It exists only at the rendering edge and is never persisted.
pub const BLANK_PLACEHOLDER: &str = "\u{2014}";

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Why a submission was turned away. Each variant carries the exact message
/// shown to the visitor plus a stable machine code for API clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InquiryRejection {
    #[error("Name is required.")]
    NameRequired,
    #[error("Valid email is required.")]
    EmailInvalid,
}

impl InquiryRejection {
    pub fn code(&self) -> &'static str {
        match self {
            Self::NameRequired => "NAME_REQUIRED",
            Self::EmailInvalid => "EMAIL_INVALID",
        }
    }
}

/// Requires a non-blank name. Checked before the email so a fully empty
/// form reports the name first.
pub fn validate_name(name: &str) -> Result<(), InquiryRejection> {
    if name.trim().is_empty() {
        return Err(InquiryRejection::NameRequired);
    }
    Ok(())
}

/// Requires an address matching [`EMAIL_PATTERN`].
pub fn validate_email(email: &str) -> Result<(), InquiryRejection> {
    if !EMAIL_RE.is_match(email.trim()) {
        return Err(InquiryRejection::EmailInvalid);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Trims a submitted value and collapses blank input to `None`.
pub fn presence(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Renders an optional field for display, substituting [`BLANK_PLACEHOLDER`]
/// when the value is missing or blank.
pub fn display(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => BLANK_PLACEHOLDER,
    }
}

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A validated contact submission, normalized and ready to persist.
///
/// `name` and `email` are non-blank and trimmed; every optional field is
/// `None` when the visitor left it empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    pub project_type: Option<String>,
    pub budget: Option<String>,
    pub timeline: Option<String>,
    pub message: Option<String>,
    pub page_url: Option<String>,
    pub referrer: Option<String>,
    pub user_agent: Option<String>,
}
