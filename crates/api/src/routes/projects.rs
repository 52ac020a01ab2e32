//! Route definitions for portfolio project reads.
//!
//! Mounted at `/projects` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::projects;
use crate::state::AppState;

/// Project routes.
///
/// ```text
/// GET    /           -> list_projects
/// GET    /{slug}     -> get_project
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(projects::list_projects))
        .route("/{slug}", get(projects::get_project))
}
