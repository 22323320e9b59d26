// src/chat/conversation.rs
// Append-only conversation store

use super::types::{Message, GREETING};

/// Ordered sequence of conversation turns. Strictly insertion-ordered: no
/// dedup, no reordering, no size cap. Lives for the session only.
#[derive(Debug)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    /// New conversation, seeded with exactly one assistant greeting before
    /// any user interaction.
    pub fn new() -> Self {
        Self {
            messages: vec![Message::assistant(GREETING)],
        }
    }

    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}
