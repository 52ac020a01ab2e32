//! Bucket object listings and public URL construction.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::client::SupabaseStore;
use crate::error::StoreError;
use crate::ports::ObjectStore;

/// Bucket holding all site media. Project images live under
/// `projects/{slug}/` inside it.
pub const MEDIA_BUCKET: &str = "course-media";

/// Maximum number of objects fetched per listing.
const LIST_LIMIT: u32 = 100;

/// One row of a bucket listing. Folder placeholders come back with a
/// null `id`, which is how callers tell them apart from real objects.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StoredObject {
    pub name: String,
    #[serde(default)]
    pub id: Option<String>,
}

/// Request body for the storage list endpoint.
#[derive(Debug, Serialize)]
struct ListRequest<'a> {
    prefix: &'a str,
    limit: u32,
    offset: u32,
    #[serde(rename = "sortBy")]
    sort_by: SortBy,
}

#[derive(Debug, Serialize)]
struct SortBy {
    column: &'static str,
    order: &'static str,
}

#[async_trait]
impl ObjectStore for SupabaseStore {
    /// Sends a `POST /storage/v1/object/list/{bucket}` request for the
    /// objects directly under `prefix`.
    async fn list(&self, prefix: &str) -> Result<Vec<StoredObject>, StoreError> {
        let body = ListRequest {
            prefix,
            limit: LIST_LIMIT,
            offset: 0,
            sort_by: SortBy {
                column: "name",
                order: "asc",
            },
        };
        let response = self
            .storage_post(&format!("object/list/{MEDIA_BUCKET}"))
            .json(&body)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `{url}/storage/v1/object/public/{bucket}/{path}`. The URL is
    /// constructed without checking that the object exists, matching how
    /// the store's own SDK resolves public URLs.
    fn public_url(&self, path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{MEDIA_BUCKET}/{path}",
            self.base_url()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;
    use crate::ports::ObjectStore as _;

    fn store() -> SupabaseStore {
        SupabaseStore::new(StoreConfig {
            url: "https://demo.supabase.co".to_string(),
            anon_key: "anon".to_string(),
            service_role_key: None,
        })
    }

    #[test]
    fn public_url_joins_bucket_and_path() {
        assert_eq!(
            store().public_url("projects/brewhaus/cover.jpg"),
            "https://demo.supabase.co/storage/v1/object/public/course-media/projects/brewhaus/cover.jpg"
        );
    }

    #[test]
    fn list_request_matches_storage_wire_format() {
        let body = ListRequest {
            prefix: "projects/brewhaus/gallery",
            limit: LIST_LIMIT,
            offset: 0,
            sort_by: SortBy {
                column: "name",
                order: "asc",
            },
        };
        let value = serde_json::to_value(&body).expect("serializes");
        assert_eq!(value["prefix"], "projects/brewhaus/gallery");
        assert_eq!(value["limit"], 100);
        assert_eq!(value["offset"], 0);
        assert_eq!(value["sortBy"]["column"], "name");
        assert_eq!(value["sortBy"]["order"], "asc");
    }

    #[test]
    fn folder_placeholder_rows_decode_with_null_id() {
        let rows: Vec<StoredObject> = serde_json::from_str(
            r#"[
                {"name": "1.jpg", "id": "a1b2", "updated_at": "2024-06-01T00:00:00Z"},
                {"name": "drafts", "id": null}
            ]"#,
        )
        .expect("listing decodes");
        assert_eq!(rows[0].id.as_deref(), Some("a1b2"));
        assert_eq!(rows[1].id, None);
    }
}
