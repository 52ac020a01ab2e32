//! Portfolio project reads.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use thrive_core::naming::{is_hidden, natural_cmp};
use thrive_core::project::{self, Project};
use thrive_core::CoreError;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Listing entry: the project row plus its resolved cover image URL.
#[derive(Debug, Serialize)]
pub struct ProjectCard {
    #[serde(flatten)]
    pub project: Project,
    pub cover_url: String,
}

/// Slug and title pair used for prev/next navigation links.
#[derive(Debug, Serialize)]
pub struct ProjectLink {
    pub slug: String,
    pub title: String,
}

impl From<&Project> for ProjectLink {
    fn from(project: &Project) -> Self {
        Self {
            slug: project.slug.clone(),
            title: project.title.clone(),
        }
    }
}

/// Detail payload: the row, its cover, the resolved gallery, and the
/// published neighbors on either side.
#[derive(Debug, Serialize)]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub project: Project,
    pub cover_url: String,
    pub gallery: Vec<String>,
    pub prev: Option<ProjectLink>,
    pub next: Option<ProjectLink>,
}

// ---------------------------------------------------------------------------
// GET /api/projects
// ---------------------------------------------------------------------------

/// Published projects in title order, each with a resolved cover URL.
pub async fn list_projects(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let projects = state.projects.list_published().await?;
    let cards: Vec<ProjectCard> = projects
        .into_iter()
        .map(|project| {
            let cover_url = state.objects.public_url(&project::cover_path(&project.slug));
            ProjectCard { project, cover_url }
        })
        .collect();

    tracing::debug!(count = cards.len(), "listed published projects");
    Ok(Json(DataResponse { data: cards }))
}

// ---------------------------------------------------------------------------
// GET /api/projects/{slug}
// ---------------------------------------------------------------------------

/// A single project with its resolved cover, gallery, and neighbors.
///
/// Unpublished projects stay reachable by direct slug so drafts can be
/// previewed; only the listing filters on `published`.
pub async fn get_project(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    project::validate_slug(&slug)?;

    let project = state
        .projects
        .find_by_slug(&slug)
        .await?
        .ok_or_else(|| CoreError::not_found("project", slug.as_str()))?;

    let cover_url = state.objects.public_url(&project::cover_path(&project.slug));
    let gallery = resolve_gallery(&state, &project).await;
    let (prev, next) = adjacent_links(&state, &project.slug).await;

    tracing::debug!(slug = %project.slug, gallery = gallery.len(), "resolved project detail");
    Ok(Json(DataResponse {
        data: ProjectDetail {
            project,
            cover_url,
            gallery,
            prev,
            next,
        },
    }))
}

/// Resolves the detail gallery to public URLs.
///
/// The bucket listing is the source of truth: folder placeholder rows and
/// dotfiles are dropped, and the rest sorted naturally so `2.jpg` comes
/// before `10.jpg`. If the listing itself fails, the authored filenames
/// from the content row are used instead, degrading the gallery rather
/// than the whole page.
async fn resolve_gallery(state: &AppState, project: &Project) -> Vec<String> {
    match state.objects.list(&project::gallery_prefix(&project.slug)).await {
        Ok(mut objects) => {
            objects.retain(|object| object.id.is_some() && !is_hidden(&object.name));
            objects.sort_by(|a, b| natural_cmp(&a.name, &b.name));
            objects
                .iter()
                .map(|object| {
                    state
                        .objects
                        .public_url(&project::gallery_path(&project.slug, &object.name))
                })
                .collect()
        }
        Err(err) => {
            tracing::warn!(
                slug = %project.slug,
                error = %err,
                "gallery listing failed, falling back to authored filenames"
            );
            project
                .gallery
                .as_deref()
                .unwrap_or_default()
                .iter()
                .map(|file| {
                    state
                        .objects
                        .public_url(&project::gallery_path(&project.slug, file))
                })
                .collect()
        }
    }
}

/// Previous and next published neighbors in title order. Adjacency is a
/// navigation nicety; a failed listing degrades to no neighbors. An
/// unpublished project has no position in the published order, so both
/// sides come back `None`.
async fn adjacent_links(
    state: &AppState,
    slug: &str,
) -> (Option<ProjectLink>, Option<ProjectLink>) {
    match state.projects.list_published().await {
        Ok(published) => {
            let (prev, next) = project::adjacent(&published, |p| p.slug == slug);
            (prev.map(ProjectLink::from), next.map(ProjectLink::from))
        }
        Err(err) => {
            tracing::warn!(slug = %slug, error = %err, "neighbor listing failed");
            (None, None)
        }
    }
}
