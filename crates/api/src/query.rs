//! Shared query parameter types for API handlers.

use folio_db::models::project::ProjectFilter;
use folio_db::models::status::ProjectStatus;
use serde::Deserialize;

use crate::error::AppError;

/// `?id=` on the admin delete endpoints.
#[derive(Debug, Deserialize)]
pub struct IdParams {
    pub id: Option<String>,
}

impl IdParams {
    /// The trimmed id, or a 400 carrying `missing_message`.
    pub fn require(&self, missing_message: &str) -> Result<&str, AppError> {
        require_id(self.id.as_deref(), missing_message)
    }
}

/// Trim `id`, rejecting an absent or blank value with a 400.
pub fn require_id<'a>(id: Option<&'a str>, missing_message: &str) -> Result<&'a str, AppError> {
    id.map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::BadRequest(missing_message.to_string()))
}

/// Filters accepted by the public project listing (`?status=&category=&limit=`).
///
/// Values arrive as raw strings so a bad status yields a JSON 400 instead of
/// the extractor's plain-text rejection.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectListParams {
    pub status: Option<String>,
    pub category: Option<String>,
    pub limit: Option<String>,
}

impl ProjectListParams {
    /// Convert into a store filter. Empty values are ignored.
    ///
    /// Only a positive integer `limit` truncates; `0`, negative and
    /// non-numeric values mean no limit.
    pub fn into_filter(self) -> Result<ProjectFilter, AppError> {
        let status = match non_empty(self.status) {
            Some(raw) => Some(raw.parse::<ProjectStatus>()?),
            None => None,
        };

        let limit = non_empty(self.limit)
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .filter(|&n| n > 0);

        Ok(ProjectFilter {
            status,
            category: non_empty(self.category),
            limit,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
