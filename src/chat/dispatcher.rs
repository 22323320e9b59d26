// src/chat/dispatcher.rs
// Request dispatch: one outbound completion call per send, one at a time

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use super::provider::{ChatMessage, ChatProvider, ProviderId};
use super::session::{ChatSession, SessionUiState};
use super::types::{Message, SYSTEM_PROMPT};
use super::widget::WidgetState;
use crate::credentials::CredentialStore;
use crate::error::ChatError;

/// Facade over the session, the credential store, and the registered
/// providers. The server shares one dispatcher across handlers.
pub struct Dispatcher {
    session: Mutex<ChatSession>,
    credentials: Arc<dyn CredentialStore>,
    providers: HashMap<ProviderId, Arc<dyn ChatProvider>>,
}

impl Dispatcher {
    pub fn new(
        credentials: Arc<dyn CredentialStore>,
        providers: Vec<Arc<dyn ChatProvider>>,
    ) -> Self {
        let providers = providers.into_iter().map(|p| (p.id(), p)).collect();
        Self {
            session: Mutex::new(ChatSession::new()),
            credentials,
            providers,
        }
    }

    /// Send one user message through the active provider.
    ///
    /// Empty input (after trimming) is a no-op and returns `Ok(None)`. A
    /// missing credential or an outstanding request rejects before anything
    /// is appended. Otherwise the user turn is appended optimistically,
    /// exactly one HTTP call goes out, and on success the assistant reply is
    /// appended and returned. On failure the user turn stays put and the
    /// caller gets the generic transport error.
    pub async fn send(&self, user_text: &str) -> Result<Option<Message>, ChatError> {
        let text = user_text.trim();
        if text.is_empty() {
            return Ok(None);
        }

        let (provider, api_key) = {
            let mut session = self.session.lock().await;
            if session.is_pending() {
                return Err(ChatError::Busy);
            }

            let id = session.active_provider();
            let api_key = match self.credentials.load(id) {
                Ok(Some(key)) => key,
                Ok(None) => return Err(ChatError::MissingCredential(id)),
                Err(e) => {
                    warn!("credential store read failed: {e:#}");
                    return Err(ChatError::MissingCredential(id));
                }
            };
            let provider = self
                .providers
                .get(&id)
                .cloned()
                .ok_or_else(|| ChatError::transport(format!("no provider registered for {id}")))?;

            session.begin_send(text)?;
            (provider, api_key)
        };

        debug!("dispatching chat request via {}", provider.name());
        let result = provider
            .complete(&api_key, &outbound_messages(text))
            .await;

        let mut session = self.session.lock().await;
        match result {
            Ok(reply) => Ok(Some(session.complete_send(reply))),
            Err(err) => {
                session.fail_send();
                Err(err)
            }
        }
    }

    /// Set the active provider and hand back its stored credential so the
    /// settings field can show it.
    pub async fn select_provider(&self, provider: ProviderId) -> Option<String> {
        let mut session = self.session.lock().await;
        session.select_provider(provider);
        match self.credentials.load(provider) {
            Ok(key) => key,
            Err(e) => {
                warn!("credential store read failed: {e:#}");
                None
            }
        }
    }

    /// Persist a credential. Empty/whitespace-only secrets are rejected
    /// without touching the store.
    pub async fn save_credential(
        &self,
        provider: ProviderId,
        secret: &str,
    ) -> Result<(), ChatError> {
        if secret.trim().is_empty() {
            return Err(ChatError::EmptyCredential);
        }
        self.credentials.save(provider, secret).map_err(|e| {
            warn!("credential store write failed: {e:#}");
            ChatError::storage(e.to_string())
        })
    }

    pub async fn history(&self) -> Vec<Message> {
        self.session.lock().await.messages().to_vec()
    }

    pub async fn ui_state(&self) -> SessionUiState {
        self.session.lock().await.ui_state()
    }

    /// Apply a widget transition and return the resulting snapshot.
    pub async fn with_widget(&self, apply: impl FnOnce(&mut WidgetState)) -> SessionUiState {
        let mut session = self.session.lock().await;
        apply(session.widget_mut());
        session.ui_state()
    }
}

/// Only the fixed system instruction and the latest user turn go out; prior
/// conversation history is not resent.
fn outbound_messages(user_text: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(user_text),
    ]
}
