// tests/common/mod.rs
// Shared test doubles: scripted chat provider + in-memory credential store

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

use cropguard::chat::provider::{ChatMessage, ChatProvider, ProviderId};
use cropguard::chat::Dispatcher;
use cropguard::credentials::{CredentialStore, MemoryCredentialStore};
use cropguard::error::ChatError;

pub enum MockResponse {
    Reply(String),
    Status(u16),
}

/// Scripted provider: counts calls, captures the outbound message list, and
/// optionally blocks on a gate so tests can observe the in-flight state.
pub struct MockProvider {
    id: ProviderId,
    response: MockResponse,
    calls: AtomicUsize,
    last_messages: Mutex<Vec<ChatMessage>>,
    gate: Option<Arc<Notify>>,
}

impl MockProvider {
    pub fn replying(id: ProviderId, reply: &str) -> Arc<Self> {
        Arc::new(Self {
            id,
            response: MockResponse::Reply(reply.to_string()),
            calls: AtomicUsize::new(0),
            last_messages: Mutex::new(Vec::new()),
            gate: None,
        })
    }

    pub fn failing(id: ProviderId, status: u16) -> Arc<Self> {
        Arc::new(Self {
            id,
            response: MockResponse::Status(status),
            calls: AtomicUsize::new(0),
            last_messages: Mutex::new(Vec::new()),
            gate: None,
        })
    }

    /// Holds every request until the gate is notified.
    pub fn gated(id: ProviderId, reply: &str, gate: Arc<Notify>) -> Arc<Self> {
        Arc::new(Self {
            id,
            response: MockResponse::Reply(reply.to_string()),
            calls: AtomicUsize::new(0),
            last_messages: Mutex::new(Vec::new()),
            gate: Some(gate),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_messages(&self) -> Vec<ChatMessage> {
        self.last_messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatProvider for MockProvider {
    fn id(&self) -> ProviderId {
        self.id
    }

    fn name(&self) -> &'static str {
        "mock"
    }

    async fn complete(
        &self,
        _api_key: &str,
        messages: &[ChatMessage],
    ) -> Result<String, ChatError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_messages.lock().unwrap() = messages.to_vec();

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        match &self.response {
            MockResponse::Reply(text) => Ok(text.clone()),
            MockResponse::Status(code) => {
                Err(ChatError::transport(format!("mock API error {code}")))
            }
        }
    }
}

/// Dispatcher wired with an in-memory credential store and one mock provider.
pub fn dispatcher_with(
    provider: Arc<MockProvider>,
    keys: &[(ProviderId, &str)],
) -> Arc<Dispatcher> {
    let store = MemoryCredentialStore::new();
    for (id, key) in keys {
        store.save(*id, key).expect("seeding credential");
    }
    let providers: Vec<Arc<dyn ChatProvider>> = vec![provider];
    Arc::new(Dispatcher::new(Arc::new(store), providers))
}
