//! Route definitions for the `/admin` resource.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use folio_core::validation::MAX_IMAGE_BYTES;

use crate::handlers::{admin_message, admin_project, dashboard, upload};
use crate::state::AppState;

/// Headroom above the image cap for multipart framing, so oversized images
/// reach the size check instead of failing inside the body reader.
const MULTIPART_OVERHEAD: usize = 1024 * 1024;

/// Routes mounted at `/admin`.
///
/// All routes require the `admin` role (enforced by handler extractors).
///
/// ```text
/// GET    /dashboard       -> get_dashboard
/// GET    /projects        -> admin_project::list
/// POST   /projects        -> admin_project::create
/// PUT    /projects        -> admin_project::update
/// DELETE /projects?id=    -> admin_project::delete
/// GET    /messages        -> admin_message::list
/// PUT    /messages        -> admin_message::update
/// DELETE /messages?id=    -> admin_message::delete
/// POST   /upload          -> upload_image
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard::get_dashboard))
        .route(
            "/projects",
            get(admin_project::list)
                .post(admin_project::create)
                .put(admin_project::update)
                .delete(admin_project::delete),
        )
        .route(
            "/messages",
            get(admin_message::list)
                .put(admin_message::update)
                .delete(admin_message::delete),
        )
        .route(
            "/upload",
            post(upload::upload_image)
                .layer(DefaultBodyLimit::max(MAX_IMAGE_BYTES + MULTIPART_OVERHEAD)),
        )
}
