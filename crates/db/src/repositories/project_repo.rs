//! Entity store for portfolio projects (`projects.json`).

use std::path::Path;

use chrono::Utc;
use folio_core::types::NumericId;

use crate::models::project::{CreateProject, Project, ProjectFilter, UpdateProject};
use crate::seed;
use crate::store::RecordStore;

/// Collection file name inside the data directory.
const COLLECTION: &str = "projects";

/// Category value that disables category filtering.
const ALL_CATEGORIES: &str = "all";

/// Provides CRUD operations and filtered listing for projects.
pub struct ProjectRepo {
    store: RecordStore<Project>,
}

impl ProjectRepo {
    /// Open the project collection, seeding it with the default portfolio.
    pub async fn open(data_dir: &Path) -> Self {
        Self::open_with(data_dir, seed::default_projects()).await
    }

    /// Open the project collection with a caller-supplied default dataset.
    pub async fn open_with(data_dir: &Path, defaults: Vec<Project>) -> Self {
        Self {
            store: RecordStore::open(data_dir, COLLECTION, defaults).await,
        }
    }

    /// The underlying record store.
    pub fn store(&self) -> &RecordStore<Project> {
        &self.store
    }

    /// All projects in insertion order.
    pub async fn get_all(&self) -> Vec<Project> {
        self.store.get_all().await
    }

    /// Apply status, then category, then limit over insertion order.
    pub async fn get_filtered(&self, filter: &ProjectFilter) -> Vec<Project> {
        let mut projects = self.store.get_all().await;

        if let Some(status) = filter.status {
            projects.retain(|p| p.status == status);
        }

        if let Some(category) = filter
            .category
            .as_deref()
            .filter(|c| *c != ALL_CATEGORIES)
        {
            projects.retain(|p| p.category == category);
        }

        if let Some(limit) = filter.limit {
            projects.truncate(limit);
        }

        projects
    }

    pub async fn get_by_id(&self, id: NumericId) -> Option<Project> {
        self.store.get_by_id(&id).await
    }

    /// Insert a new project. `created_at` defaults to now.
    pub async fn create(&self, mut input: CreateProject) -> Project {
        input.created_at.get_or_insert_with(Utc::now);
        let project = self.store.create(input).await;
        tracing::info!(id = project.id, title = %project.title, "Project created");
        project
    }

    /// Merge the supplied fields and stamp `updated_at` with today's date.
    ///
    /// Returns `None` if no project with the given `id` exists.
    pub async fn update(&self, id: NumericId, input: UpdateProject) -> Option<Project> {
        let today = Utc::now().date_naive();
        let updated = self
            .store
            .update(&id, |project| {
                input.apply_to(project);
                project.updated_at = Some(today);
            })
            .await;
        if updated.is_some() {
            tracing::info!(id, "Project updated");
        }
        updated
    }

    /// Delete a project. Returns `true` if a record was removed.
    pub async fn delete(&self, id: NumericId) -> bool {
        let deleted = self.store.delete(&id).await;
        if deleted {
            tracing::info!(id, "Project deleted");
        }
        deleted
    }

    /// Distinct categories in first-seen order.
    pub async fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for project in self.store.get_all().await {
            if !categories.contains(&project.category) {
                categories.push(project.category);
            }
        }
        categories
    }

    pub async fn count(&self) -> usize {
        self.store.len().await
    }
}
