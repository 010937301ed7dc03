pub mod message;
pub mod project;
pub mod status;
pub mod user;
