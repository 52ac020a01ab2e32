//! Portfolio project entity and storage-path conventions.
//!
//! Every project keys its media under the bucket by slug:
//! `projects/{slug}/cover.jpg` for the cover and
//! `projects/{slug}/gallery/` for the gallery images.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CoreError;

/// Cover image filename within a project's storage folder.
pub const COVER_FILENAME: &str = "cover.jpg";

/// Upper bound on slug length. Slugs double as storage-path segments, so
/// runaway values are rejected before any query is issued.
pub const MAX_SLUG_LENGTH: usize = 100;

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A portfolio project row.
///
/// Presentation and narrative fields are authored freely in the content
/// store and may be absent. Array columns tolerate SQL `NULL` and decode
/// to empty vectors. The store-generated `id` is carried as an opaque
/// string; `slug` is the key this system actually works with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub id: Option<String>,
    pub slug: String,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub span: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub timeframe: Option<String>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub problem: Option<String>,
    #[serde(default)]
    pub solution: Option<String>,
    #[serde(default)]
    pub results: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub highlights: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub deliverables: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tools: Vec<String>,
    /// Authored gallery filenames from the content row. The API serves
    /// resolved bucket URLs, so this column is not echoed back out.
    #[serde(default, skip_serializing)]
    pub gallery: Option<Vec<String>>,
    #[serde(default)]
    pub published: bool,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

// ---------------------------------------------------------------------------
// Storage paths
// ---------------------------------------------------------------------------

/// Bucket path of a project's cover image.
pub fn cover_path(slug: &str) -> String {
    format!("projects/{slug}/{COVER_FILENAME}")
}

/// Bucket prefix under which a project's gallery images live. No trailing
/// slash; listing appends its own separator.
pub fn gallery_prefix(slug: &str) -> String {
    format!("projects/{slug}/gallery")
}

/// Bucket path of a single gallery image.
pub fn gallery_path(slug: &str, file: &str) -> String {
    format!("projects/{slug}/gallery/{file}")
}

/// Validates a slug before it is used as a lookup key and path segment.
/// Accepts ASCII letters, digits, hyphens and underscores.
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    if slug.is_empty() {
        return Err(CoreError::validation("slug must not be empty"));
    }
    if slug.len() > MAX_SLUG_LENGTH {
        return Err(CoreError::validation(format!(
            "slug exceeds {MAX_SLUG_LENGTH} characters"
        )));
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(CoreError::validation("slug contains invalid characters"));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Adjacency
// ---------------------------------------------------------------------------

/// Finds the neighbors of the item matched by `is_current` within an
/// ordered slice. Returns `(None, None)` when nothing matches; the first
/// and last items have no previous and no next neighbor respectively.
pub fn adjacent<T, F>(items: &[T], mut is_current: F) -> (Option<&T>, Option<&T>)
where
    F: FnMut(&T) -> bool,
{
    let Some(idx) = items.iter().position(|item| is_current(item)) else {
        return (None, None);
    };
    let prev = idx.checked_sub(1).and_then(|i| items.get(i));
    let next = items.get(idx + 1);
    (prev, next)
}
