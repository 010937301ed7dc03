//! JSON-file persistence for Folio.
//!
//! - [`store`] -- the generic [`RecordStore`](store::RecordStore).
//! - [`models`] -- stored entity types and their DTOs.
//! - [`repositories`] -- per-entity stores used by the API handlers.

use std::path::{Path, PathBuf};

pub mod models;
pub mod repositories;
pub mod seed;
pub mod store;

/// Sub-directory appended to the data root.
const DATA_SUBDIR: &str = "data";

/// Writable root used by hosted/production deployments.
const PRODUCTION_ROOT: &str = "/tmp";

/// Resolve the directory that holds the collection files.
///
/// An explicit `override_root` wins. Otherwise production uses `/tmp` and
/// development uses the current working directory. `data/` is appended in
/// every case.
pub fn resolve_data_dir(override_root: Option<&str>, production: bool) -> PathBuf {
    let root = match override_root.filter(|s| !s.trim().is_empty()) {
        Some(root) => PathBuf::from(root),
        None if production => PathBuf::from(PRODUCTION_ROOT),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };
    root.join(DATA_SUBDIR)
}

/// Create the data directory if needed. Called by every store on open.
///
/// Failure is logged, not returned: stores keep working in memory and log
/// each failed save.
pub(crate) async fn ensure_data_dir(dir: &Path) {
    if let Err(e) = tokio::fs::create_dir_all(dir).await {
        tracing::warn!(path = %dir.display(), error = %e, "Unable to create data directory");
    }
}
