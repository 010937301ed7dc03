//! Session extractors.
//!
//! - [`auth::AuthSession`] -- Any valid session from the `auth-token` cookie.
//! - [`rbac::RequireAdmin`] -- Requires the `admin` role.

pub mod auth;
pub mod rbac;
