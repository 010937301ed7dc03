//! Cookie-based session extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::auth::cookie::read_session_token;
use crate::auth::session::{decode_session, SessionClaims, SessionStatus};
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated session extracted from the `auth-token` cookie.
///
/// ```ignore
/// async fn my_handler(session: AuthSession) -> AppResult<Json<()>> {
///     tracing::info!(email = %session.claims.email, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub claims: SessionClaims,
}

impl AuthSession {
    pub fn email(&self) -> &str {
        &self.claims.email
    }

    pub fn role(&self) -> &str {
        &self.claims.role
    }
}

/// Cookie state of a request: absent, or the decoded [`SessionStatus`].
pub fn session_from_parts(parts: &Parts, state: &AppState) -> Option<SessionStatus> {
    read_session_token(&parts.headers)
        .map(|token| decode_session(&token, &state.config.session))
}

impl FromRequestParts<AppState> for AuthSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match session_from_parts(parts, state) {
            Some(SessionStatus::Valid(claims)) => Ok(AuthSession { claims }),
            Some(SessionStatus::Expired) => {
                tracing::debug!(path = %parts.uri.path(), "Expired session");
                Err(AppError::unauthorized())
            }
            Some(SessionStatus::Invalid) => {
                tracing::debug!(path = %parts.uri.path(), "Invalid session token");
                Err(AppError::unauthorized())
            }
            None => {
                tracing::debug!(path = %parts.uri.path(), "No session cookie");
                Err(AppError::unauthorized())
            }
        }
    }
}
