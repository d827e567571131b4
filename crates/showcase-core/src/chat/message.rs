//! Chat transcript message types.

use serde::{Deserialize, Serialize};

/// Who authored a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Message typed (or quick-replied) by the visitor.
    User,
    /// Message produced by the advisor, may embed directive markers.
    Assistant,
}

/// A single message in the chat transcript.
///
/// Messages are never mutated after they are appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
    /// Timestamp when the message was created (ISO 8601 format).
    pub timestamp: String,
}

impl ChatMessage {
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }

    pub fn is_user(&self) -> bool {
        self.role == MessageRole::User
    }
}
