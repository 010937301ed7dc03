pub mod admin;
pub mod auth;
pub mod contact;
pub mod health;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                 login (public)
/// /auth/signup                create admin account (public)
/// /auth/verify                session check (cookie)
/// /auth/logout                clear session cookie
///
/// /admin/dashboard            counters (admin only)
/// /admin/projects             list, create, update, delete (admin only)
/// /admin/messages             list, update, delete (admin only)
/// /admin/upload               image upload (admin only)
///
/// /projects                   filtered listing (public)
/// /projects/categories        distinct categories (public)
/// /projects/{id}              single project (public)
///
/// /contact                    message submission (public)
/// /messages                   message submission, echoes the message (public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/admin", admin::router())
        .nest("/projects", project::router())
        .merge(contact::router())
}
