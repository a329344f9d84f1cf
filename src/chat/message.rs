//! Message structures and sender identities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier of a message within a session
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(String);

impl MessageId {
    /// Wrap an existing identifier
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Borrow the raw identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifies the author of a message
///
/// Exactly one sender id represents the local user; every other id is a
/// remote participant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SenderId(String);

impl SenderId {
    /// Wrap an existing sender identifier
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Borrow the raw identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SenderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Represents a chat message
///
/// Fields are private so that a message's id, text and timestamp cannot
/// change once it has been built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    id: MessageId,
    text: String,
    created_at: DateTime<Utc>,
    sender_id: SenderId,
    /// Display name of the author, if known
    #[serde(default)]
    sender_name: Option<String>,
}

impl Message {
    /// Create a new message
    pub fn new(
        id: MessageId,
        text: impl Into<String>,
        created_at: DateTime<Utc>,
        sender_id: SenderId,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            created_at,
            sender_id,
            sender_name: None,
        }
    }

    /// Attach an author display name
    pub fn with_sender_name(mut self, name: impl Into<String>) -> Self {
        self.sender_name = Some(name.into());
        self
    }

    /// Copy of this message carrying a different id
    ///
    /// Used when a freshly generated id turns out to collide before the
    /// message is appended anywhere.
    pub fn with_id(&self, id: MessageId) -> Self {
        Self {
            id,
            ..self.clone()
        }
    }

    /// Message id
    pub fn id(&self) -> &MessageId {
        &self.id
    }

    /// Message text, exactly as composed
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Author id
    pub fn sender_id(&self) -> &SenderId {
        &self.sender_id
    }

    /// Author display name
    pub fn sender_name(&self) -> Option<&str> {
        self.sender_name.as_deref()
    }

    /// Whether this message was written by `sender`
    pub fn is_from(&self, sender: &SenderId) -> bool {
        &self.sender_id == sender
    }
}
