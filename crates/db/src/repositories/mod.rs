//! Entity stores layered over [`RecordStore`](crate::store::RecordStore).
//!
//! Each repository owns exactly one collection file and returns `Option` /
//! `bool` for not-found cases; handlers turn those into 404 responses.

pub mod message_repo;
pub mod project_repo;
pub mod user_repo;

pub use message_repo::MessageRepo;
pub use project_repo::ProjectRepo;
pub use user_repo::UserRepo;
