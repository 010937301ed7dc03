//! Client library for the external image host.
//!
//! Exposes the [`ImageHost`] seam used by the upload handler, plus a
//! Cloudinary implementation that performs signed REST uploads with
//! [`reqwest`].

pub mod cloudinary;
pub mod config;
pub mod error;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use cloudinary::CloudinaryClient;
pub use config::MediaConfig;
pub use error::MediaError;

/// An image received from a client, ready to be forwarded.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Where the host stored the image and its final dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadedImage {
    pub url: String,
    pub public_id: String,
    pub width: u32,
    pub height: u32,
}

/// A remote service that stores images and serves them over HTTPS.
#[async_trait]
pub trait ImageHost: Send + Sync {
    async fn upload(&self, image: ImageUpload) -> Result<UploadedImage, MediaError>;
}
