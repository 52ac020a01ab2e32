pub mod contact;
pub mod health;
pub mod projects;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /contact            submit inquiry (POST)
///
/// /projects           published listing (GET)
/// /projects/{slug}    project detail (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Contact form submissions.
        .nest("/contact", contact::router())
        // Portfolio project reads.
        .nest("/projects", projects::router())
}
