//! Handlers for the `/auth` resource (login, signup, verify, logout).

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{AppendHeaders, IntoResponse, Response};
use axum::Json;
use folio_core::error::CoreError;
use folio_core::roles::ROLE_ADMIN;
use folio_core::validation::{
    missing_fields, validate_email, validate_password_strength, MIN_PASSWORD_LENGTH,
};
use folio_db::models::user::NewUser;
use serde::{Deserialize, Serialize};

use crate::auth::cookie::{clear_session_cookie, read_session_token, session_cookie};
use crate::auth::password::{hash_password, verify_password};
use crate::auth::session::{decode_session, issue_session_token, SessionStatus};
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

const INVALID_CREDENTIALS: &str = "Invalid credentials";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Request body for `POST /auth/signup`.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Account details returned by login. Logins always carry the admin role.
#[derive(Debug, Serialize)]
pub struct SessionUser {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: &'static str,
    pub user: SessionUser,
}

/// Account details returned by signup.
#[derive(Debug, Serialize)]
pub struct CreatedUser {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub success: bool,
    pub message: &'static str,
    pub user: CreatedUser,
}

/// Identity reported by `GET /auth/verify`.
#[derive(Debug, Serialize)]
pub struct VerifiedUser {
    pub email: String,
    pub role: String,
}

#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<VerifiedUser>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/login
///
/// Authenticate with email + password. Sets the `auth-token` cookie.
pub async fn login(
    State(state): State<AppState>,
    AppJson(input): AppJson<LoginRequest>,
) -> AppResult<Response> {
    let email = input.email.trim();

    let user = state
        .users
        .find_by_email(email)
        .await
        .ok_or_else(|| AppError::Unauthorized(INVALID_CREDENTIALS.into()))?;

    let password_valid = verify_password(&input.password, &user.password)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::info!(email = %email, "Login failed");
        return Err(AppError::Unauthorized(INVALID_CREDENTIALS.into()));
    }

    let config = &state.config.session;
    let token = issue_session_token(&user.id, &user.email, &user.name, ROLE_ADMIN, config)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = %user.id, "Login successful");

    let body = LoginResponse {
        success: true,
        message: "Login successful",
        user: SessionUser {
            id: user.id,
            email: user.email,
            name: user.name,
            role: ROLE_ADMIN.to_string(),
        },
    };
    Ok((
        AppendHeaders([(SET_COOKIE, session_cookie(&token, config))]),
        Json(body),
    )
        .into_response())
}

/// POST /api/auth/signup
///
/// Create an account. Name, email and password are required and the password
/// must be at least six characters.
pub async fn signup(
    State(state): State<AppState>,
    AppJson(input): AppJson<SignupRequest>,
) -> AppResult<(StatusCode, Json<SignupResponse>)> {
    let missing = missing_fields(&[
        ("name", input.name.as_deref()),
        ("email", input.email.as_deref()),
        ("password", input.password.as_deref()),
    ]);
    if !missing.is_empty() {
        return Err(AppError::BadRequest("All fields are required".into()));
    }
    let name = input.name.unwrap_or_default();
    let email = input.email.unwrap_or_default();
    let password = input.password.unwrap_or_default();

    validate_email(email.trim())?;
    validate_password_strength(&password, MIN_PASSWORD_LENGTH)?;

    let password_hash = hash_password(&password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = state
        .users
        .create(NewUser {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            password_hash,
        })
        .await
        .map_err(|e| match e {
            CoreError::Conflict(msg) => AppError::BadRequest(msg),
            other => AppError::Core(other),
        })?;

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            success: true,
            message: "Account created successfully",
            user: CreatedUser {
                id: user.id,
                name: user.name,
                email: user.email,
            },
        }),
    ))
}

/// GET /api/auth/verify
///
/// Report whether the session cookie is valid. Failures are 401 with the
/// specific reason.
pub async fn verify(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let reason = match read_session_token(&headers)
        .map(|token| decode_session(&token, &state.config.session))
    {
        Some(SessionStatus::Valid(claims)) => {
            return Json(VerifyResponse {
                authenticated: true,
                user: Some(VerifiedUser {
                    email: claims.email,
                    role: claims.role,
                }),
                message: None,
            })
            .into_response();
        }
        Some(SessionStatus::Expired) => "Token expired",
        Some(SessionStatus::Invalid) => "Invalid token",
        None => "No token found",
    };

    (
        StatusCode::UNAUTHORIZED,
        Json(VerifyResponse {
            authenticated: false,
            user: None,
            message: Some(reason),
        }),
    )
        .into_response()
}

/// POST /api/auth/logout
///
/// Clear the session cookie. Succeeds whether or not a session was present.
pub async fn logout(State(state): State<AppState>) -> Response {
    (
        AppendHeaders([(SET_COOKIE, clear_session_cookie(&state.config.session))]),
        Json(crate::response::ApiResponse::message("Logged out successfully")),
    )
        .into_response()
}
