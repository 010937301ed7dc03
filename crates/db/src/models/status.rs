//! Lifecycle status enums for projects and messages.
//!
//! Both serialize as lowercase strings. Parsing an unknown value through
//! [`std::str::FromStr`] yields a [`CoreError::Validation`].

use std::fmt;
use std::str::FromStr;

use folio_core::error::CoreError;
use serde::{Deserialize, Serialize};

/// Publication state of a portfolio project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Draft,
    Active,
    Completed,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [Self::Draft, Self::Active, Self::Completed];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }
}

impl FromStr for ProjectStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid status '{s}'. Must be one of: draft, active, completed"
                ))
            })
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Triage state of a contact message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    Unread,
    Read,
    Replied,
}

impl MessageStatus {
    pub const ALL: [MessageStatus; 3] = [Self::Unread, Self::Read, Self::Replied];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unread => "unread",
            Self::Read => "read",
            Self::Replied => "replied",
        }
    }
}

impl FromStr for MessageStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid status '{s}'. Must be one of: unread, read, replied"
                ))
            })
    }
}

impl fmt::Display for MessageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_status_parses_known_values() {
        assert_eq!("active".parse::<ProjectStatus>().unwrap(), ProjectStatus::Active);
        assert_eq!("draft".parse::<ProjectStatus>().unwrap(), ProjectStatus::Draft);
        assert!("archived".parse::<ProjectStatus>().is_err());
        assert!("Active".parse::<ProjectStatus>().is_err());
    }

    #[test]
    fn message_status_serializes_lowercase() {
        let json = serde_json::to_string(&MessageStatus::Replied).unwrap();
        assert_eq!(json, "\"replied\"");
        let parsed: MessageStatus = serde_json::from_str("\"unread\"").unwrap();
        assert_eq!(parsed, MessageStatus::Unread);
    }

    #[test]
    fn unknown_status_is_rejected_on_deserialize() {
        assert!(serde_json::from_str::<ProjectStatus>("\"archived\"").is_err());
    }
}
