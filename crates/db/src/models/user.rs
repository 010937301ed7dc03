//! Admin account model and DTOs.

use folio_core::types::Timestamp;
use serde::{Deserialize, Serialize};

use crate::store::Record;

/// Full account record as stored in `users.json`.
///
/// `password` holds an Argon2id PHC hash. NEVER return this type from an
/// API handler; use [`UserResponse`] instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub created_at: Timestamp,
}

impl Record for User {
    type Id = String;
    type Draft = NewUser;

    const ENTITY: &'static str = "User";

    fn id(&self) -> &String {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn from_draft(id: String, draft: NewUser) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            password: draft.password_hash,
            created_at: chrono::Utc::now(),
        }
    }
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: Timestamp,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            created_at: user.created_at,
        }
    }
}

/// DTO for creating an account. The password must already be hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}
