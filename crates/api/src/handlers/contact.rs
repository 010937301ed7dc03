//! Public message submission (`/contact` and `/messages`).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use folio_core::validation::{missing_fields, validate_email};
use folio_db::models::message::{Message, NewMessage};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Subject stored when `/messages` is submitted without one.
const DEFAULT_SUBJECT: &str = "General inquiry";

/// Body shared by both submission endpoints.
#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

fn field(value: &Option<String>) -> String {
    value.as_deref().map(str::trim).unwrap_or_default().to_string()
}

/// POST /api/contact
///
/// All four fields are required. The stored message is not echoed back.
pub async fn submit_contact(
    State(state): State<AppState>,
    AppJson(input): AppJson<ContactRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<()>>)> {
    let missing = missing_fields(&[
        ("name", input.name.as_deref()),
        ("email", input.email.as_deref()),
        ("subject", input.subject.as_deref()),
        ("message", input.message.as_deref()),
    ]);
    if !missing.is_empty() {
        return Err(AppError::BadRequest("All fields are required".into()));
    }

    let email = field(&input.email);
    validate_email(&email)?;

    state
        .messages
        .create(NewMessage {
            name: field(&input.name),
            email,
            subject: field(&input.subject),
            message: field(&input.message),
        })
        .await;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::message(
            "Message sent successfully! I will get back to you soon.",
        )),
    ))
}

/// POST /api/messages
///
/// Name, email and message are required; subject is optional. The email is
/// lower-cased and the stored message is returned.
pub async fn submit_message(
    State(state): State<AppState>,
    AppJson(input): AppJson<ContactRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Message>>)> {
    let missing = missing_fields(&[
        ("name", input.name.as_deref()),
        ("email", input.email.as_deref()),
        ("message", input.message.as_deref()),
    ]);
    if !missing.is_empty() {
        return Err(AppError::BadRequest(
            "Name, email, and message are required".into(),
        ));
    }

    let email = field(&input.email).to_lowercase();
    validate_email(&email)?;

    let subject = Some(field(&input.subject))
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_SUBJECT.to_string());

    let message = state
        .messages
        .create(NewMessage {
            name: field(&input.name),
            email,
            subject,
            message: field(&input.message),
        })
        .await;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::data_with_message(
            message,
            "Message sent successfully! I'll get back to you soon.",
        )),
    ))
}
