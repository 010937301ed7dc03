//! Public read endpoints for portfolio projects.

use axum::extract::{Path, Query, State};
use axum::Json;
use folio_core::error::CoreError;
use folio_db::models::project::Project;

use crate::error::AppResult;
use crate::handlers::admin_project::parse_project_id;
use crate::query::ProjectListParams;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/projects?status=&category=&limit=
///
/// Filters apply in order: status, category (`all` disables it), limit.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ProjectListParams>,
) -> AppResult<Json<ApiResponse<Vec<Project>>>> {
    let filter = params.into_filter()?;
    let projects = state.projects.get_filtered(&filter).await;
    tracing::debug!(count = projects.len(), ?filter, "Listing projects");
    Ok(Json(ApiResponse::data(projects)))
}

/// GET /api/projects/categories
pub async fn categories(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<String>>>> {
    Ok(Json(ApiResponse::data(state.projects.categories().await)))
}

/// GET /api/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Project>>> {
    let id = parse_project_id(&id)?;
    let project = state
        .projects
        .get_by_id(id)
        .await
        .ok_or_else(|| CoreError::not_found("Project", id))?;
    Ok(Json(ApiResponse::data(project)))
}
