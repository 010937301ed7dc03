//! Well-known role name constants.
//!
//! Accounts created through signup are always issued sessions with
//! [`ROLE_ADMIN`]; any other role value is treated as unprivileged.

pub const ROLE_ADMIN: &str = "admin";
