pub mod admin_message;
pub mod admin_project;
pub mod auth;
pub mod contact;
pub mod dashboard;
pub mod project;
pub mod upload;
