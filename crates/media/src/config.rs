//! Image-host credentials loaded from environment variables.
//!
//! | Env var                     | Default              |
//! |-----------------------------|----------------------|
//! | `CLOUDINARY_CLOUD_NAME`     | required             |
//! | `CLOUDINARY_API_KEY`        | required             |
//! | `CLOUDINARY_API_SECRET`     | required             |
//! | `CLOUDINARY_UPLOAD_FOLDER`  | `portfolio-projects` |

use std::fmt;

use crate::error::MediaError;

/// Folder uploads land in when none is configured.
pub const DEFAULT_UPLOAD_FOLDER: &str = "portfolio-projects";

const CLOUD_NAME_VAR: &str = "CLOUDINARY_CLOUD_NAME";
const API_KEY_VAR: &str = "CLOUDINARY_API_KEY";
const API_SECRET_VAR: &str = "CLOUDINARY_API_SECRET";
const UPLOAD_FOLDER_VAR: &str = "CLOUDINARY_UPLOAD_FOLDER";

/// Account credentials and upload placement.
#[derive(Clone)]
pub struct MediaConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    pub upload_folder: String,
}

impl fmt::Debug for MediaConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaConfig")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &"<redacted>")
            .field("api_secret", &"<redacted>")
            .field("upload_folder", &self.upload_folder)
            .finish()
    }
}

impl MediaConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, MediaError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load using `lookup` to resolve variable names.
    ///
    /// Blank values count as missing. The error lists every missing name.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, MediaError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let cloud_name = read(CLOUD_NAME_VAR);
        let api_key = read(API_KEY_VAR);
        let api_secret = read(API_SECRET_VAR);

        match (cloud_name, api_key, api_secret) {
            (Some(cloud_name), Some(api_key), Some(api_secret)) => Ok(Self {
                cloud_name,
                api_key,
                api_secret,
                upload_folder: read(UPLOAD_FOLDER_VAR)
                    .unwrap_or_else(|| DEFAULT_UPLOAD_FOLDER.to_string()),
            }),
            (cloud_name, api_key, api_secret) => {
                let missing = [
                    (CLOUD_NAME_VAR, cloud_name.is_none()),
                    (API_KEY_VAR, api_key.is_none()),
                    (API_SECRET_VAR, api_secret.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, missing)| missing.then_some(name))
                .collect();
                Err(MediaError::MissingCredentials(missing))
            }
        }
    }
}
