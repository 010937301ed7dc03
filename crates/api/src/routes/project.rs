//! Route definitions for the public `/projects` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET /               -> list (status, category, limit)
/// GET /categories     -> categories
/// GET /{id}           -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list))
        .route("/categories", get(project::categories))
        .route("/{id}", get(project::get_by_id))
}
