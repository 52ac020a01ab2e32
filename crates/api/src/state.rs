use std::sync::Arc;

use thrive_mailer::Mailer;
use thrive_store::ports::{InquiryStore, ObjectStore, ProjectStore};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Collaborators are held as trait objects so tests can swap in fakes.
/// This is cheaply cloneable (everything is behind `Arc` or is `Copy`).
#[derive(Clone)]
pub struct AppState {
    /// Inquiry writes (privileged store access).
    pub inquiries: Arc<dyn InquiryStore>,
    /// Project row reads (anonymous store access).
    pub projects: Arc<dyn ProjectStore>,
    /// Bucket listings and public URL resolution.
    pub objects: Arc<dyn ObjectStore>,
    /// Outbound notification email.
    pub mailer: Arc<dyn Mailer>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Optional capabilities resolved at startup.
    pub features: Features,
}

/// Which optional capabilities were configured when the process started.
/// Reported by `/health` so operators can spot a half-configured deploy;
/// the request paths degrade on their own regardless of these flags.
#[derive(Debug, Clone, Copy)]
pub struct Features {
    /// Privileged store key present, so inquiry inserts can succeed.
    pub store_writes: bool,
    /// Delivery credentials present, so notifications go out.
    pub email: bool,
}
