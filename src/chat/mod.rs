//! Chat module - the AgriBot assistant widget backend
//!
//! This module provides the conversation side of CropGuard:
//! - Append-only conversation store seeded with the assistant greeting
//! - Provider selection between ChatGPT and DeepSeek
//! - Single-flight request dispatch against either chat-completion API
//! - Widget shell open/minimize state

pub mod conversation;
pub mod dispatcher;
pub mod provider;
pub mod session;
pub mod types;
pub mod widget;

// Re-export key types for external use
pub use conversation::Conversation;
pub use dispatcher::Dispatcher;
pub use session::{ChatSession, SessionUiState};
pub use types::{Message, Role, GREETING, SYSTEM_PROMPT};
