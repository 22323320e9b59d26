// src/chat/types.rs
// Message model and fixed prompt text for the assistant widget

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// System instruction sent with every outbound completion request.
pub const SYSTEM_PROMPT: &str = "You are an expert agricultural AI assistant specializing in plant diseases, crop management, farming techniques, and sustainable agriculture. Provide helpful, accurate, and practical advice to farmers and gardeners.";

/// Assistant greeting seeded into every new conversation.
pub const GREETING: &str = "Hello! I'm your agricultural AI assistant. I can help you with plant diseases, farming techniques, and crop management. What would you like to know?";

/// Who authored a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// One turn in the displayed conversation. Immutable once created; lives only
/// for the current session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
    /// Creation time, unix milliseconds.
    pub timestamp: i64,
}

impl Message {
    fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp: Utc::now().timestamp_millis(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_get_unique_ids() {
        let a = Message::user("first");
        let b = Message::user("second");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&Role::Assistant).unwrap(),
            "\"assistant\""
        );
    }
}
