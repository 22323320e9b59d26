// src/error.rs
// Failure taxonomy for the chat slice

use crate::chat::provider::ProviderId;

/// Everything that can go wrong between the user pressing send and a reply
/// landing in the conversation. `Transport` deliberately shows one generic
/// message regardless of cause; the detail only goes to the logs.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("No API key configured for {0}. Add one in settings before sending.")]
    MissingCredential(ProviderId),

    #[error("API key cannot be empty")]
    EmptyCredential,

    #[error("A request is already in progress")]
    Busy,

    #[error("Failed to get a response from the AI. Please check your API key and try again.")]
    Transport { detail: String },

    #[error("Could not save the API key")]
    Storage { detail: String },
}

impl ChatError {
    /// Non-2xx status, network error, or an unexpected response shape all
    /// collapse into the same user-visible transport failure.
    pub fn transport(detail: impl Into<String>) -> Self {
        Self::Transport {
            detail: detail.into(),
        }
    }

    pub fn storage(detail: impl Into<String>) -> Self {
        Self::Storage {
            detail: detail.into(),
        }
    }
}
