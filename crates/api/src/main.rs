use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use thrive_api::config::ServerConfig;
use thrive_api::router::build_app_router;
use thrive_api::state::{AppState, Features};
use thrive_mailer::{MailerConfig, ResendMailer};
use thrive_store::{StoreConfig, SupabaseStore};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "thrive_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Content store ---
    let store_config = StoreConfig::from_env();
    let store_writes = store_config.service_role_key.is_some();
    if !store_writes {
        tracing::warn!(
            "SUPABASE_SERVICE_ROLE_KEY is not set; contact submissions will fail to persist"
        );
    }
    let store = Arc::new(SupabaseStore::new(store_config));
    tracing::info!(url = %store.config().url, "Content store client ready");

    // --- Mailer ---
    // Credentials are re-read per send; this probe only feeds /health.
    let email = match MailerConfig::from_env() {
        Ok(_) => true,
        Err(err) => {
            tracing::warn!(
                error = %err,
                "Notification email not configured; inquiries will be stored without notifying"
            );
            false
        }
    };
    let mailer = Arc::new(ResendMailer::new());

    // --- App state ---
    let state = AppState {
        inquiries: store.clone(),
        projects: store.clone(),
        objects: store,
        mailer,
        config: Arc::new(config.clone()),
        features: Features {
            store_writes,
            email,
        },
    };

    // --- Router ---
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager (e.g. systemd, Docker, Kubernetes).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
