//! Handlers for `/admin/messages` (triage and replies).

use axum::extract::{Query, State};
use axum::Json;
use folio_core::error::CoreError;
use folio_db::models::message::Message;
use folio_db::models::status::MessageStatus;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::rbac::RequireAdmin;
use crate::query::{require_id, IdParams};
use crate::response::ApiResponse;
use crate::state::AppState;

const INVALID_ACTION: &str = "Invalid action or missing data";

/// Body of `PUT /admin/messages`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageUpdateRequest {
    pub id: Option<String>,
    pub action: Option<String>,
    pub status: Option<String>,
    pub reply_message: Option<String>,
}

/// What a valid update asks for.
#[derive(Debug, PartialEq)]
enum MessageAction {
    UpdateStatus(MessageStatus),
    Reply(String),
}

impl MessageUpdateRequest {
    fn action(&self) -> Result<MessageAction, AppError> {
        let present = |v: &Option<String>| {
            v.as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        match (self.action.as_deref(), present(&self.status), present(&self.reply_message)) {
            (Some("updateStatus"), Some(status), _) => {
                Ok(MessageAction::UpdateStatus(status.parse::<MessageStatus>()?))
            }
            (Some("reply"), _, Some(reply)) => Ok(MessageAction::Reply(reply)),
            _ => Err(AppError::BadRequest(INVALID_ACTION.into())),
        }
    }
}

/// GET /api/admin/messages
///
/// All messages, newest first.
pub async fn list(
    RequireAdmin(_session): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<Message>>>> {
    Ok(Json(ApiResponse::data(state.messages.list().await)))
}

/// PUT /api/admin/messages
///
/// `action = "updateStatus"` requires `status`; `action = "reply"` requires
/// `replyMessage` and marks the message replied.
pub async fn update(
    RequireAdmin(_session): RequireAdmin,
    State(state): State<AppState>,
    AppJson(input): AppJson<MessageUpdateRequest>,
) -> AppResult<Json<ApiResponse<Message>>> {
    let id = require_id(input.id.as_deref(), "Message ID is required")?;
    let action = input.action()?;

    let updated = match action {
        MessageAction::UpdateStatus(status) => state.messages.update_status(id, status).await,
        MessageAction::Reply(text) => state.messages.reply(id, &text).await,
    }
    .ok_or_else(|| CoreError::not_found("Message", id))?;

    tracing::info!(id = %updated.id, status = %updated.status, "Message updated");
    Ok(Json(ApiResponse::data_with_message(
        updated,
        "Message updated successfully",
    )))
}

/// DELETE /api/admin/messages?id=
pub async fn delete(
    RequireAdmin(_session): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<IdParams>,
) -> AppResult<Json<ApiResponse<()>>> {
    let id = params.require("Message ID is required")?;

    if !state.messages.delete(id).await {
        return Err(CoreError::not_found("Message", id).into());
    }
    tracing::info!(id, "Message deleted");
    Ok(Json(ApiResponse::message("Message deleted successfully")))
}
