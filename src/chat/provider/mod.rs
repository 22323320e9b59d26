// src/chat/provider/mod.rs
// Chat provider trait and the shared Chat Completions adapter

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

use crate::error::ChatError;

mod deepseek;
mod openai;

pub use deepseek::DeepSeekProvider;
pub use openai::OpenAiProvider;

/// The two supported chat-completion services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    Chatgpt,
    Deepseek,
}

impl ProviderId {
    pub const ALL: [ProviderId; 2] = [ProviderId::Chatgpt, ProviderId::Deepseek];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::Chatgpt => "chatgpt",
            ProviderId::Deepseek => "deepseek",
        }
    }

    /// Human-readable name for settings UI and error messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderId::Chatgpt => "ChatGPT",
            ProviderId::Deepseek => "DeepSeek",
        }
    }

    /// Credential-store key, `"<id>-api-key"`.
    pub fn storage_key(&self) -> String {
        format!("{}-api-key", self.as_str())
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ProviderId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "chatgpt" => Ok(ProviderId::Chatgpt),
            "deepseek" => Ok(ProviderId::Deepseek),
            other => Err(format!("unknown provider: {other}")),
        }
    }
}

/// Message format for all providers
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".into(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".into(),
            content: content.into(),
        }
    }
}

/// Polymorphic chat-completion interface. Both variants share the request
/// body builder and response parser below; they differ only in endpoint and
/// model.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    fn id(&self) -> ProviderId;

    /// Provider name for logging/debugging
    fn name(&self) -> &'static str;

    /// Issue exactly one completion request and return the first choice's
    /// text. Any failure surfaces as `ChatError::Transport`.
    async fn complete(
        &self,
        api_key: &str,
        messages: &[ChatMessage],
    ) -> Result<String, ChatError>;
}

/// Uniform request body across providers.
pub(crate) fn completion_body(
    model: &str,
    messages: &[ChatMessage],
    max_tokens: u32,
    temperature: f32,
) -> Value {
    json!({
        "model": model,
        "messages": messages,
        "max_tokens": max_tokens,
        "temperature": temperature,
    })
}

/// POST the body and extract `choices[0].message.content`. Non-2xx statuses,
/// network errors, and unexpected response shapes all become `Transport`:
/// the user sees one generic message, the log keeps the detail.
pub(crate) async fn post_completion(
    client: &Client,
    name: &'static str,
    url: &str,
    api_key: &str,
    body: &Value,
) -> Result<String, ChatError> {
    let response = client
        .post(url)
        .header("Authorization", format!("Bearer {}", api_key))
        .json(body)
        .send()
        .await
        .map_err(|e| {
            warn!("{} request failed: {}", name, e);
            ChatError::transport(format!("{} request failed: {}", name, e))
        })?;

    if !response.status().is_success() {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_default();
        warn!("{} API error {}: {}", name, status, error_text);
        return Err(ChatError::transport(format!(
            "{} API error {}",
            name, status
        )));
    }

    let raw: Value = response.json().await.map_err(|e| {
        warn!("{} returned unreadable body: {}", name, e);
        ChatError::transport(format!("{} returned unreadable body", name))
    })?;

    let content = raw["choices"][0]["message"]["content"]
        .as_str()
        .ok_or_else(|| {
            warn!("{} response missing choices[0].message.content", name);
            ChatError::transport(format!("no content in {} response", name))
        })?;

    Ok(content.to_string())
}
