// src/chat/provider/openai.rs
// OpenAI Chat Completions provider (ChatGPT)

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::{completion_body, post_completion, ChatMessage, ChatProvider, ProviderId};
use crate::config::CONFIG;
use crate::error::ChatError;

pub struct OpenAiProvider {
    client: Client,
    base_url: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl OpenAiProvider {
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
            CONFIG.openai_base_url.clone(),
            CONFIG.openai_model.clone(),
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
impl ChatProvider for OpenAiProvider {
    fn id(&self) -> ProviderId {
        ProviderId::Chatgpt
    }

    fn name(&self) -> &'static str {
        "openai"
    }

    async fn complete(
        &self,
        api_key: &str,
        messages: &[ChatMessage],
    ) -> Result<String, ChatError> {
        debug!("OpenAI request: model={}", self.model);

        let body = completion_body(&self.model, messages, self.max_tokens, self.temperature);
        post_completion(&self.client, "OpenAI", &self.endpoint(), api_key, &body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_tolerates_trailing_slash() {
        let provider = OpenAiProvider::new(
            "https://api.openai.com/".to_string(),
            "gpt-4o-mini".to_string(),
            1000,
            0.7,
        );
        assert_eq!(
            provider.endpoint(),
            "https://api.openai.com/v1/chat/completions"
        );
    }
}
