//! Shared test harness: in-memory fakes for the store and mailer plus a
//! router builder that mirrors the production middleware stack.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use thrive_api::config::ServerConfig;
use thrive_api::router::build_app_router;
use thrive_api::state::{AppState, Features};
use thrive_core::inquiry::Inquiry;
use thrive_core::project::Project;
use thrive_mailer::{MailError, Mailer, SendReceipt};
use thrive_store::objects::StoredObject;
use thrive_store::ports::{InquiryStore, ObjectStore, ProjectStore};
use thrive_store::StoreError;

// ---------------------------------------------------------------------------
// Fakes
// ---------------------------------------------------------------------------

fn read_failure() -> StoreError {
    StoreError::Api {
        status: 500,
        body: "store unavailable".to_string(),
    }
}

/// Records inserted inquiries; optionally fails every insert.
#[derive(Default)]
pub struct FakeInquiryStore {
    pub rows: Mutex<Vec<Inquiry>>,
    pub fail: bool,
}

#[async_trait]
impl InquiryStore for FakeInquiryStore {
    async fn insert_inquiry(&self, inquiry: &Inquiry) -> Result<(), StoreError> {
        if self.fail {
            return Err(read_failure());
        }
        self.rows.lock().unwrap().push(inquiry.clone());
        Ok(())
    }
}

/// Serves a fixed set of project rows.
#[derive(Default)]
pub struct FakeProjectStore {
    pub projects: Vec<Project>,
    pub fail: bool,
}

#[async_trait]
impl ProjectStore for FakeProjectStore {
    async fn list_published(&self) -> Result<Vec<Project>, StoreError> {
        if self.fail {
            return Err(read_failure());
        }
        let mut published: Vec<Project> = self
            .projects
            .iter()
            .filter(|p| p.published)
            .cloned()
            .collect();
        published.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(published)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Project>, StoreError> {
        if self.fail {
            return Err(read_failure());
        }
        Ok(self.projects.iter().find(|p| p.slug == slug).cloned())
    }
}

/// Base URL the fake object store resolves public paths against.
pub const FAKE_STORAGE_BASE: &str = "https://cdn.test/media";

/// Serves canned bucket listings and deterministic public URLs.
#[derive(Default)]
pub struct FakeObjectStore {
    pub listings: HashMap<String, Vec<StoredObject>>,
    pub fail: bool,
}

#[async_trait]
impl ObjectStore for FakeObjectStore {
    async fn list(&self, prefix: &str) -> Result<Vec<StoredObject>, StoreError> {
        if self.fail {
            return Err(read_failure());
        }
        Ok(self.listings.get(prefix).cloned().unwrap_or_default())
    }

    fn public_url(&self, path: &str) -> String {
        format!("{FAKE_STORAGE_BASE}/{path}")
    }
}

/// What the fake mailer does with each send.
#[derive(Debug, Clone, Copy, Default)]
pub enum MailerMode {
    #[default]
    Succeeds,
    NotConfigured,
    Fails,
}

/// Records notification attempts.
#[derive(Default)]
pub struct FakeMailer {
    pub mode: MailerMode,
    pub sent: Mutex<Vec<Inquiry>>,
}

#[async_trait]
impl Mailer for FakeMailer {
    async fn send_inquiry_notification(&self, inquiry: &Inquiry) -> Result<SendReceipt, MailError> {
        match self.mode {
            MailerMode::Succeeds => {
                self.sent.lock().unwrap().push(inquiry.clone());
                Ok(SendReceipt {
                    id: "email-1".to_string(),
                })
            }
            MailerMode::NotConfigured => Err(MailError::NotConfigured(
                "RESEND_API_KEY is not set".to_string(),
            )),
            MailerMode::Fails => Err(MailError::Api {
                status: 422,
                body: "rejected".to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Handles onto the fakes injected into a test router, kept around so
/// tests can assert on recorded state after a request.
pub struct TestDeps {
    pub inquiries: Arc<FakeInquiryStore>,
    pub projects: Arc<FakeProjectStore>,
    pub objects: Arc<FakeObjectStore>,
    pub mailer: Arc<FakeMailer>,
    pub features: Features,
}

impl Default for TestDeps {
    fn default() -> Self {
        Self {
            inquiries: Arc::new(FakeInquiryStore::default()),
            projects: Arc::new(FakeProjectStore::default()),
            objects: Arc::new(FakeObjectStore::default()),
            mailer: Arc::new(FakeMailer::default()),
            features: Features {
                store_writes: true,
                email: true,
            },
        }
    }
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router around the given fakes.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(deps: &TestDeps) -> Router {
    let config = test_config();
    let state = AppState {
        inquiries: deps.inquiries.clone(),
        projects: deps.projects.clone(),
        objects: deps.objects.clone(),
        mailer: deps.mailer.clone(),
        config: Arc::new(config.clone()),
        features: deps.features,
    };
    build_app_router(state, &config)
}

/// A published project row with empty presentation fields.
pub fn project(slug: &str, title: &str) -> Project {
    Project {
        id: None,
        slug: slug.to_string(),
        title: title.to_string(),
        category: "Brand".to_string(),
        span: None,
        year: None,
        role: None,
        timeframe: None,
        tagline: Some(format!("{title} tagline")),
        overview: Some(format!("{title} overview")),
        problem: None,
        solution: None,
        results: None,
        highlights: vec![],
        deliverables: vec![],
        tools: vec![],
        gallery: None,
        published: true,
    }
}

/// A bucket file row with a non-null id.
pub fn object(name: &str) -> StoredObject {
    StoredObject {
        name: name.to_string(),
        id: Some(format!("id-{name}")),
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request to the app and return the raw response.
pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with an arbitrary content type and raw body.
pub async fn post_raw(app: Router, uri: &str, content_type: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
