use std::sync::Arc;

use folio_db::repositories::{MessageRepo, ProjectRepo, UserRepo};
use folio_media::ImageHost;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: every field is behind an `Arc`. Each store is opened
/// once at startup and owns its collection file.
#[derive(Clone)]
pub struct AppState {
    pub projects: Arc<ProjectRepo>,
    pub messages: Arc<MessageRepo>,
    pub users: Arc<UserRepo>,
    /// Destination for admin image uploads.
    pub image_host: Arc<dyn ImageHost>,
    pub config: Arc<ServerConfig>,
}
