//! Entity store for admin accounts (`users.json`).

use std::path::Path;

use folio_core::error::CoreError;

use crate::models::user::{NewUser, User, UserResponse};
use crate::store::RecordStore;

const COLLECTION: &str = "users";

/// Provides account creation and lookup. Emails are unique.
pub struct UserRepo {
    store: RecordStore<User>,
}

impl UserRepo {
    pub async fn open(data_dir: &Path) -> Self {
        Self {
            store: RecordStore::open(data_dir, COLLECTION, Vec::new()).await,
        }
    }

    /// Create an account, rejecting an email that is already registered.
    pub async fn create(&self, input: NewUser) -> Result<User, CoreError> {
        let email = input.email.clone();
        let user = self
            .store
            .create_checked(input, |users| {
                if users.iter().any(|u| u.email == email) {
                    Err(CoreError::Conflict(
                        "User with this email already exists".into(),
                    ))
                } else {
                    Ok(())
                }
            })
            .await?;
        tracing::info!(id = %user.id, "User created");
        Ok(user)
    }

    pub async fn find_by_email(&self, email: &str) -> Option<User> {
        self.store
            .filter(|u| u.email == email)
            .await
            .into_iter()
            .next()
    }

    pub async fn find_by_id(&self, id: &str) -> Option<User> {
        self.store.get_by_id(&id.to_string()).await
    }

    pub async fn exists(&self, email: &str) -> bool {
        self.find_by_email(email).await.is_some()
    }

    /// Every account without password hashes.
    pub async fn list(&self) -> Vec<UserResponse> {
        self.store
            .get_all()
            .await
            .iter()
            .map(UserResponse::from)
            .collect()
    }
}
