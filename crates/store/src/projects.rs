//! Project reads against the `projects` table.

use async_trait::async_trait;
use thrive_core::project::Project;

use crate::client::SupabaseStore;
use crate::error::StoreError;
use crate::ports::ProjectStore;

#[async_trait]
impl ProjectStore for SupabaseStore {
    /// Sends a `GET /rest/v1/projects?select=*&published=eq.true&order=title.asc`
    /// request. Draft rows never leave the store.
    async fn list_published(&self) -> Result<Vec<Project>, StoreError> {
        let response = self
            .rest_get("projects?select=*&published=eq.true&order=title.asc")
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Sends a `GET /rest/v1/projects?select=*&slug=eq.{slug}&limit=1`
    /// request. Slugs are validated for URL-safe characters before they
    /// reach this call, so no percent-encoding is applied here.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Project>, StoreError> {
        let response = self
            .rest_get(&format!("projects?select=*&slug=eq.{slug}&limit=1"))
            .send()
            .await?;
        let rows: Vec<Project> = Self::parse_response(response).await?;
        Ok(rows.into_iter().next())
    }
}
