//! Domain primitives shared by every Folio crate.
//!
//! No I/O lives here: errors, id aliases, role names, and the pure
//! validation rules applied to admin and public payloads.

pub mod error;
pub mod roles;
pub mod types;
pub mod validation;
