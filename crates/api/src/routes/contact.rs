//! Public message submission routes, merged at the `/api` root.

use axum::routing::post;
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

/// ```text
/// POST /contact    -> submit_contact
/// POST /messages   -> submit_message
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/contact", post(contact::submit_contact))
        .route("/messages", post(contact::submit_message))
}
