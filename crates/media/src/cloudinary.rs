//! Signed REST uploads to Cloudinary.
//!
//! Every upload is resized to fill 800x600 with automatic quality and placed
//! in the configured folder. Requests are signed with SHA-256 over the
//! alphabetically sorted parameters followed by the API secret; the account
//! must have SHA-256 signatures enabled.

use async_trait::async_trait;
use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::config::MediaConfig;
use crate::error::MediaError;
use crate::{ImageHost, ImageUpload, UploadedImage};

/// Production API root.
pub const DEFAULT_API_BASE: &str = "https://api.cloudinary.com";

/// Incoming transformation applied to every upload.
pub const UPLOAD_TRANSFORMATION: &str = "c_fill,h_600,w_800/q_auto";

/// HTTP client for a single Cloudinary account.
pub struct CloudinaryClient {
    client: reqwest::Client,
    config: MediaConfig,
    api_base: String,
}

/// Subset of the upload response the API cares about.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
    public_id: String,
    width: u32,
    height: u32,
}

impl From<UploadResponse> for UploadedImage {
    fn from(r: UploadResponse) -> Self {
        Self {
            url: r.secure_url,
            public_id: r.public_id,
            width: r.width,
            height: r.height,
        }
    }
}

impl CloudinaryClient {
    pub fn new(config: MediaConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: MediaConfig) -> Self {
        Self {
            client,
            config,
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    /// Point the client at a different API root (no trailing slash).
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    fn upload_url(&self) -> String {
        format!(
            "{}/v1_1/{}/image/upload",
            self.api_base, self.config.cloud_name
        )
    }

    /// Parameters covered by the signature, sorted by name.
    fn signed_params(&self, timestamp: i64) -> Vec<(&'static str, String)> {
        vec![
            ("folder", self.config.upload_folder.clone()),
            ("timestamp", timestamp.to_string()),
            ("transformation", UPLOAD_TRANSFORMATION.to_string()),
        ]
    }

    // ---- private helpers ----

    /// Return the response unchanged on success, or an
    /// [`MediaError::Upstream`] carrying the status and body text.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, MediaError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(MediaError::Upstream {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

/// Hex SHA-256 of `k1=v1&k2=v2...` (in the given order) followed by `secret`.
pub fn sign_params(params: &[(&str, String)], secret: &str) -> String {
    let joined = params
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");
    let mut hasher = Sha256::new();
    hasher.update(joined.as_bytes());
    hasher.update(secret.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[async_trait]
impl ImageHost for CloudinaryClient {
    async fn upload(&self, image: ImageUpload) -> Result<UploadedImage, MediaError> {
        let params = self.signed_params(chrono::Utc::now().timestamp());
        let signature = sign_params(&params, &self.config.api_secret);

        let file = reqwest::multipart::Part::bytes(image.bytes)
            .file_name(image.file_name)
            .mime_str(&image.content_type)?;

        let mut form = reqwest::multipart::Form::new()
            .part("file", file)
            .text("api_key", self.config.api_key.clone())
            .text("signature", signature);
        for (name, value) in params {
            form = form.text(name, value);
        }

        let response = self
            .client
            .post(self.upload_url())
            .multipart(form)
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        let uploaded: UploadedImage = response.json::<UploadResponse>().await?.into();
        tracing::info!(public_id = %uploaded.public_id, "Image uploaded");
        Ok(uploaded)
    }
}
