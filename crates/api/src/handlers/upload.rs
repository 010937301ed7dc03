//! Handler for `POST /admin/upload`: forward an image to the image host.

use axum::extract::{Multipart, State};
use axum::Json;
use folio_core::validation::validate_image_upload;
use folio_media::{ImageUpload, UploadedImage};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Multipart field carrying the image.
const IMAGE_FIELD: &str = "image";

/// POST /api/admin/upload
///
/// Accepts one `image` field (JPEG, PNG or WebP, at most 10 MB) and returns
/// the hosted URL, public id and final dimensions.
pub async fn upload_image(
    RequireAdmin(_session): RequireAdmin,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<ApiResponse<UploadedImage>>> {
    let mut image: Option<ImageUpload> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some(IMAGE_FIELD) {
            continue; // ignore unknown fields
        }
        let file_name = field.file_name().unwrap_or("upload").to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        image = Some(ImageUpload {
            file_name,
            content_type,
            bytes: bytes.to_vec(),
        });
    }

    let image = image.ok_or_else(|| AppError::BadRequest("No image file provided".into()))?;
    validate_image_upload(&image.content_type, image.bytes.len())?;

    tracing::info!(
        file_name = %image.file_name,
        size = image.bytes.len(),
        "Forwarding image upload"
    );
    let uploaded = state.image_host.upload(image).await?;

    Ok(Json(ApiResponse::data_with_message(
        uploaded,
        "Image uploaded successfully",
    )))
}
