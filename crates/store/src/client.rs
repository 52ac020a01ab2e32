//! REST client for the hosted content store.
//!
//! Wraps the store's Postgres REST interface (`/rest/v1`) and storage
//! API (`/storage/v1`) using [`reqwest`]. Reads authenticate with the
//! anonymous key; inserts require the privileged key.

use std::time::Duration;

use crate::config::StoreConfig;
use crate::error::StoreError;

/// Timeout applied to every store request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for a single store instance.
pub struct SupabaseStore {
    client: reqwest::Client,
    config: StoreConfig,
}

impl SupabaseStore {
    /// Create a new client for the store described by `config`.
    pub fn new(config: StoreConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("HTTP client must build");
        Self { client, config }
    }

    /// Create a client reusing an existing [`reqwest::Client`] (useful
    /// for connection pooling across components).
    pub fn with_client(client: reqwest::Client, config: StoreConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    // ---- request builders ----

    /// `GET {url}/rest/v1/{path_and_query}` with the anonymous key.
    pub(crate) fn rest_get(&self, path_and_query: &str) -> reqwest::RequestBuilder {
        self.client
            .get(format!("{}/rest/v1/{}", self.config.url, path_and_query))
            .header("apikey", &self.config.anon_key)
            .bearer_auth(&self.config.anon_key)
    }

    /// `POST {url}/rest/v1/{path}` with the privileged key, or
    /// [`StoreError::Config`] when no privileged key is configured.
    pub(crate) fn rest_post_privileged(
        &self,
        path: &str,
    ) -> Result<reqwest::RequestBuilder, StoreError> {
        let key = self.config.service_role_key.as_deref().ok_or_else(|| {
            StoreError::Config("SUPABASE_SERVICE_ROLE_KEY is not set".to_string())
        })?;
        Ok(self
            .client
            .post(format!("{}/rest/v1/{}", self.config.url, path))
            .header("apikey", key)
            .bearer_auth(key))
    }

    /// `POST {url}/storage/v1/{path}` with the anonymous key.
    pub(crate) fn storage_post(&self, path: &str) -> reqwest::RequestBuilder {
        self.client
            .post(format!("{}/storage/v1/{}", self.config.url, path))
            .header("apikey", &self.config.anon_key)
            .bearer_auth(&self.config.anon_key)
    }

    /// Base URL of the store.
    pub(crate) fn base_url(&self) -> &str {
        &self.config.url
    }

    // ---- response helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`StoreError::Api`] with the
    /// status and body text on failure.
    pub(crate) async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, StoreError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(StoreError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    pub(crate) async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, StoreError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// Assert the response has a success status code, discarding the body.
    pub(crate) async fn check_status(response: reqwest::Response) -> Result<(), StoreError> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}
