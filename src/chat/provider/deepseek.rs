// src/chat/provider/deepseek.rs
// DeepSeek Chat API provider (OpenAI-compatible)

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::{completion_body, post_completion, ChatMessage, ChatProvider, ProviderId};
use crate::config::CONFIG;
use crate::error::ChatError;

pub struct DeepSeekProvider {
    client: Client,
    base_url: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl DeepSeekProvider {
    pub fn new(base_url: String, model: String, max_tokens: u32, temperature: f32) -> Self {
        Self {
            client: Client::new(),
            base_url,
            model,
            max_tokens,
            temperature,
        }
    }

    pub fn from_config() -> Self {
        Self::new(
            CONFIG.deepseek_base_url.clone(),
            CONFIG.deepseek_model.clone(),
            CONFIG.max_tokens,
            CONFIG.temperature,
        )
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl ChatProvider for DeepSeekProvider {
    fn id(&self) -> ProviderId {
        ProviderId::Deepseek
    }

    fn name(&self) -> &'static str {
        "deepseek"
    }

    async fn complete(
        &self,
        api_key: &str,
        messages: &[ChatMessage],
    ) -> Result<String, ChatError> {
        debug!("DeepSeek request: model={}", self.model);

        let body = completion_body(&self.model, messages, self.max_tokens, self.temperature);
        post_completion(&self.client, "DeepSeek", &self.endpoint(), api_key, &body).await
    }
}
