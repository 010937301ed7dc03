//! Contact message model and DTOs.

use folio_core::types::Timestamp;
use serde::{Deserialize, Serialize};

use crate::models::status::MessageStatus;
use crate::store::Record;

/// A message submitted through the public contact form.
///
/// `replied_at` and `reply_message` stay empty until the message is
/// transitioned to [`MessageStatus::Replied`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: String,
    pub message: String,
    pub status: MessageStatus,
    pub created_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replied_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_message: Option<String>,
}

impl Record for Message {
    type Id = String;
    type Draft = NewMessage;

    const ENTITY: &'static str = "Message";

    fn id(&self) -> &String {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn from_draft(id: String, draft: NewMessage) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            subject: draft.subject,
            message: draft.message,
            status: MessageStatus::Unread,
            created_at: chrono::Utc::now(),
            replied_at: None,
            reply_message: None,
        }
    }
}

/// Fields supplied by a visitor. Status and id are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}
