//! Entity store for contact messages (`messages.json`).

use std::path::Path;

use chrono::Utc;

use crate::models::message::{Message, NewMessage};
use crate::models::status::MessageStatus;
use crate::store::RecordStore;

const COLLECTION: &str = "messages";

/// Provides creation, triage, and reply operations for messages.
pub struct MessageRepo {
    store: RecordStore<Message>,
}

impl MessageRepo {
    /// Open the message collection. A fresh install starts empty.
    pub async fn open(data_dir: &Path) -> Self {
        Self {
            store: RecordStore::open(data_dir, COLLECTION, Vec::new()).await,
        }
    }

    pub fn store(&self) -> &RecordStore<Message> {
        &self.store
    }

    /// Store a new message with status `unread`.
    pub async fn create(&self, input: NewMessage) -> Message {
        let message = self.store.create(input).await;
        tracing::info!(id = %message.id, "Message received");
        message
    }

    /// All messages, newest first.
    pub async fn list(&self) -> Vec<Message> {
        self.store
            .sorted_by(|a, b| b.created_at.cmp(&a.created_at))
            .await
    }

    pub async fn get_by_id(&self, id: &str) -> Option<Message> {
        self.store.get_by_id(&id.to_string()).await
    }

    /// Set the status. Moving to `replied` also stamps `replied_at`.
    pub async fn update_status(&self, id: &str, status: MessageStatus) -> Option<Message> {
        let now = Utc::now();
        self.store
            .update(&id.to_string(), |message| {
                message.status = status;
                if status == MessageStatus::Replied {
                    message.replied_at = Some(now);
                }
            })
            .await
    }

    /// Record a reply: status `replied`, reply text, and `replied_at`.
    pub async fn reply(&self, id: &str, reply_message: &str) -> Option<Message> {
        let now = Utc::now();
        self.store
            .update(&id.to_string(), |message| {
                message.status = MessageStatus::Replied;
                message.reply_message = Some(reply_message.to_string());
                message.replied_at = Some(now);
            })
            .await
    }

    /// Delete a message. Returns `true` if a record was removed.
    pub async fn delete(&self, id: &str) -> bool {
        self.store.delete(&id.to_string()).await
    }

    pub async fn unread_count(&self) -> usize {
        self.store
            .filter(|m| m.status == MessageStatus::Unread)
            .await
            .len()
    }

    pub async fn count(&self) -> usize {
        self.store.len().await
    }
}
