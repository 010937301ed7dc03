//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`session`] -- session token issuance and decoding.
//! - [`cookie`] -- the `auth-token` cookie carrying the session token.

pub mod cookie;
pub mod password;
pub mod session;
