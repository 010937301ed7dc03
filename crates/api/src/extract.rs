//! Request body extractors that reject with the JSON error envelope.

use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON request body whose rejection is an [`AppError`].
///
/// A malformed body or a field of the wrong type becomes a 400 in the
/// `{ success: false, message, code }` envelope instead of axum's
/// plain-text 400/415/422.
///
/// ```ignore
/// async fn create(AppJson(payload): AppJson<ProjectPayload>) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
