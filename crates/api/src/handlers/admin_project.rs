//! Handlers for `/admin/projects` (admin CRUD over portfolio projects).

use std::fmt;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::NumericId;
use folio_core::validation::{parse_technologies, require_fields, validate_url};
use folio_db::models::project::{CreateProject, Project, UpdateProject};
use folio_db::models::status::ProjectStatus;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::rbac::RequireAdmin;
use crate::query::IdParams;
use crate::response::ApiResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// A project id sent either as a JSON number or a numeric string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum IdInput {
    Number(NumericId),
    Text(String),
}

impl fmt::Display for IdInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Technologies as a comma-separated string or a JSON array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TechnologiesInput {
    List(Vec<String>),
    Csv(String),
}

impl TechnologiesInput {
    fn into_list(self) -> Vec<String> {
        match self {
            Self::Csv(raw) => parse_technologies(&raw),
            Self::List(items) => parse_technologies(&items.join(",")),
        }
    }
}

/// Body of `POST` and `PUT /admin/projects`. Every field is optional at the
/// wire level; [`validate`] enforces the mandatory set.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPayload {
    pub id: Option<IdInput>,
    pub title: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub status: Option<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub technologies: Option<TechnologiesInput>,
}

/// A payload that passed validation.
#[derive(Debug)]
struct ValidProject {
    title: String,
    category: String,
    description: String,
    image_url: Option<String>,
    status: ProjectStatus,
    github_url: String,
    live_url: String,
    technologies: Option<Vec<String>>,
}

fn trimmed(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

/// Check mandatory fields, URL shape and status, in that order.
fn validate(payload: ProjectPayload) -> Result<ValidProject, AppError> {
    require_fields(&[
        ("title", payload.title.as_deref()),
        ("category", payload.category.as_deref()),
        ("description", payload.description.as_deref()),
        ("status", payload.status.as_deref()),
        ("githubUrl", payload.github_url.as_deref()),
        ("liveUrl", payload.live_url.as_deref()),
    ])?;

    let github_url = trimmed(payload.github_url);
    let live_url = trimmed(payload.live_url);
    validate_url("githubUrl", &github_url)?;
    validate_url("liveUrl", &live_url)?;

    let status: ProjectStatus = trimmed(payload.status).parse()?;

    Ok(ValidProject {
        title: trimmed(payload.title),
        category: trimmed(payload.category),
        description: trimmed(payload.description),
        image_url: payload
            .image_url
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty()),
        status,
        github_url,
        live_url,
        technologies: payload.technologies.map(TechnologiesInput::into_list),
    })
}

/// Parse a project id, rejecting anything that is not an integer.
pub fn parse_project_id(raw: &str) -> Result<NumericId, AppError> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid project ID".into()))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/admin/projects
pub async fn list(
    RequireAdmin(_session): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<Project>>>> {
    Ok(Json(ApiResponse::data(state.projects.get_all().await)))
}

/// POST /api/admin/projects
pub async fn create(
    RequireAdmin(_session): RequireAdmin,
    State(state): State<AppState>,
    AppJson(payload): AppJson<ProjectPayload>,
) -> AppResult<(StatusCode, Json<ApiResponse<Project>>)> {
    let valid = validate(payload)?;

    let project = state
        .projects
        .create(CreateProject {
            title: valid.title,
            category: valid.category,
            description: valid.description,
            image_url: valid.image_url,
            github_url: Some(valid.github_url),
            live_url: Some(valid.live_url),
            technologies: valid.technologies.unwrap_or_default(),
            status: valid.status,
            created_at: None,
        })
        .await;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::data_with_message(
            project,
            "Project created successfully",
        )),
    ))
}

/// PUT /api/admin/projects
///
/// The id travels in the body. Image and technologies are only replaced
/// when supplied.
pub async fn update(
    RequireAdmin(_session): RequireAdmin,
    State(state): State<AppState>,
    AppJson(mut payload): AppJson<ProjectPayload>,
) -> AppResult<Json<ApiResponse<Project>>> {
    let id_text = payload.id.take().map(|id| id.to_string());
    require_fields(&[("id", id_text.as_deref())])?;
    let id = parse_project_id(id_text.as_deref().unwrap_or_default())?;

    let valid = validate(payload)?;

    let project = state
        .projects
        .update(
            id,
            UpdateProject {
                title: Some(valid.title),
                category: Some(valid.category),
                description: Some(valid.description),
                image_url: valid.image_url,
                github_url: Some(valid.github_url),
                live_url: Some(valid.live_url),
                technologies: valid.technologies,
                status: Some(valid.status),
            },
        )
        .await
        .ok_or_else(|| CoreError::not_found("Project", id))?;

    Ok(Json(ApiResponse::data_with_message(
        project,
        "Project updated successfully",
    )))
}

/// DELETE /api/admin/projects?id=
pub async fn delete(
    RequireAdmin(_session): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<IdParams>,
) -> AppResult<Json<ApiResponse<()>>> {
    let id = parse_project_id(params.require("Project ID is required")?)?;

    if !state.projects.delete(id).await {
        return Err(CoreError::not_found("Project", id).into());
    }
    Ok(Json(ApiResponse::message("Project deleted successfully")))
}
