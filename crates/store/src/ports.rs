//! Port traits over the content store.
//!
//! The API crate depends on these traits rather than on the concrete
//! client, so its handlers can be exercised with in-memory fakes.

use async_trait::async_trait;
use thrive_core::inquiry::Inquiry;
use thrive_core::project::Project;

use crate::error::StoreError;
use crate::objects::StoredObject;

/// Writes contact inquiries into the store.
#[async_trait]
pub trait InquiryStore: Send + Sync {
    /// Persists a validated inquiry as a new row. The row is written with
    /// the initial triage status and no identifier is echoed back.
    async fn insert_inquiry(&self, inquiry: &Inquiry) -> Result<(), StoreError>;
}

/// Reads portfolio project rows.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// All published projects, ordered by title ascending.
    async fn list_published(&self) -> Result<Vec<Project>, StoreError>;

    /// A single project by slug, published or not. `Ok(None)` means the
    /// slug does not exist; errors mean the store could not answer.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Project>, StoreError>;
}

/// Reads bucket object listings and resolves public URLs.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Objects directly under `prefix` in the media bucket, in the
    /// store's own name order. Folder placeholders are included and it is
    /// the caller's job to filter them.
    async fn list(&self, prefix: &str) -> Result<Vec<StoredObject>, StoreError>;

    /// Public download URL for a bucket path.
    fn public_url(&self, path: &str) -> String;
}
