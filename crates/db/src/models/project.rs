//! Project entity model and DTOs.

use chrono::NaiveDate;
use folio_core::types::{NumericId, Timestamp};
use serde::{Deserialize, Serialize};

use crate::models::status::ProjectStatus;
use crate::store::Record;

/// Image shown for projects created without an uploaded image.
pub const DEFAULT_IMAGE_URL: &str =
    "https://res.cloudinary.com/demo/image/upload/v1/portfolio-projects/default-project";

fn default_image_url() -> String {
    DEFAULT_IMAGE_URL.to_string()
}

/// A portfolio project as stored in `projects.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: NumericId,
    pub title: String,
    pub category: String,
    pub description: String,
    #[serde(default = "default_image_url")]
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub status: ProjectStatus,
    /// Set once at creation. Seed entries may lack it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    /// Date of the most recent update.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDate>,
}

impl Record for Project {
    type Id = NumericId;
    type Draft = CreateProject;

    const ENTITY: &'static str = "Project";

    fn id(&self) -> &NumericId {
        &self.id
    }

    fn set_id(&mut self, id: NumericId) {
        self.id = id;
    }

    fn from_draft(id: NumericId, draft: CreateProject) -> Self {
        Self {
            id,
            title: draft.title,
            category: draft.category,
            description: draft.description,
            image_url: draft.image_url.unwrap_or_else(default_image_url),
            github_url: draft.github_url,
            live_url: draft.live_url,
            technologies: draft.technologies,
            status: draft.status,
            created_at: draft.created_at,
            updated_at: None,
        }
    }
}

/// DTO for creating a new project.
#[derive(Debug, Clone)]
pub struct CreateProject {
    pub title: String,
    pub category: String,
    pub description: String,
    /// Falls back to [`DEFAULT_IMAGE_URL`] if omitted.
    pub image_url: Option<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub technologies: Vec<String>,
    pub status: ProjectStatus,
    /// Stamped with the current time by the repository if omitted.
    pub created_at: Option<Timestamp>,
}

/// DTO for updating an existing project. Only `Some` fields are applied.
#[derive(Debug, Clone, Default)]
pub struct UpdateProject {
    pub title: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub status: Option<ProjectStatus>,
}

impl UpdateProject {
    /// Shallow-merge the supplied fields into `project`.
    pub fn apply_to(self, project: &mut Project) {
        if let Some(title) = self.title {
            project.title = title;
        }
        if let Some(category) = self.category {
            project.category = category;
        }
        if let Some(description) = self.description {
            project.description = description;
        }
        if let Some(image_url) = self.image_url {
            project.image_url = image_url;
        }
        if let Some(github_url) = self.github_url {
            project.github_url = Some(github_url);
        }
        if let Some(live_url) = self.live_url {
            project.live_url = Some(live_url);
        }
        if let Some(technologies) = self.technologies {
            project.technologies = technologies;
        }
        if let Some(status) = self.status {
            project.status = status;
        }
    }
}

/// Filters for the public project listing, applied in field order.
#[derive(Debug, Clone, Default)]
pub struct ProjectFilter {
    pub status: Option<ProjectStatus>,
    /// Exact category match. `"all"` disables the filter.
    pub category: Option<String>,
    /// Keep at most this many leading records.
    pub limit: Option<usize>,
}
