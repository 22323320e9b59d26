// src/chat/session.rs
// Session state: conversation + provider selection + dispatch phase

use serde::Serialize;

use super::conversation::Conversation;
use super::provider::ProviderId;
use super::types::Message;
use super::widget::WidgetState;
use crate::error::ChatError;

/// All transient widget-session state. Recreated on every process start;
/// nothing here is persisted. Transitions are synchronous so the dispatch
/// state machine (Idle -> Sending -> Idle) is testable without I/O.
#[derive(Debug)]
pub struct ChatSession {
    conversation: Conversation,
    active_provider: ProviderId,
    pending_request: bool,
    widget: WidgetState,
}

/// Snapshot handed to the UI.
#[derive(Debug, Clone, Serialize)]
pub struct SessionUiState {
    pub is_open: bool,
    pub is_minimized: bool,
    pub active_provider: ProviderId,
    pub pending_request: bool,
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            conversation: Conversation::new(),
            active_provider: ProviderId::Chatgpt,
            pending_request: false,
            widget: WidgetState::default(),
        }
    }

    pub fn active_provider(&self) -> ProviderId {
        self.active_provider
    }

    /// Exactly one provider is active at a time; selecting does not touch
    /// the conversation or any in-flight request.
    pub fn select_provider(&mut self, provider: ProviderId) {
        self.active_provider = provider;
    }

    pub fn is_pending(&self) -> bool {
        self.pending_request
    }

    /// Enter Sending: append the user turn optimistically and disable the
    /// send affordance. Rejects when a request is already outstanding.
    pub fn begin_send(&mut self, content: &str) -> Result<(), ChatError> {
        if self.pending_request {
            return Err(ChatError::Busy);
        }
        self.conversation.append(Message::user(content));
        self.pending_request = true;
        Ok(())
    }

    /// Sending -> Idle-with-new-message.
    pub fn complete_send(&mut self, reply: String) -> Message {
        let message = Message::assistant(reply);
        self.conversation.append(message.clone());
        self.pending_request = false;
        message
    }

    /// Sending -> Idle-with-error. The failed user turn stays in the
    /// conversation; there is no rollback and no retry.
    pub fn fail_send(&mut self) {
        self.pending_request = false;
    }

    pub fn messages(&self) -> &[Message] {
        self.conversation.messages()
    }

    pub fn widget_mut(&mut self) -> &mut WidgetState {
        &mut self.widget
    }

    pub fn ui_state(&self) -> SessionUiState {
        SessionUiState {
            is_open: self.widget.is_open,
            is_minimized: self.widget.is_minimized,
            active_provider: self.active_provider,
            pending_request: self.pending_request,
        }
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
