//! Role-based access control extractor.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use folio_core::roles::ROLE_ADMIN;

use super::auth::AuthSession;
use crate::error::AppError;
use crate::state::AppState;

/// Requires a valid session with the `admin` role.
///
/// A non-admin role is rejected with the same 401 as a missing session.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(session): RequireAdmin) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub AuthSession);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = AuthSession::from_request_parts(parts, state).await?;
        if session.role() != ROLE_ADMIN {
            tracing::debug!(role = %session.role(), "Admin role required");
            return Err(AppError::unauthorized());
        }
        Ok(RequireAdmin(session))
    }
}
