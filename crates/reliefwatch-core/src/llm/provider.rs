//! Chat provider trait and the Mistral implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::instrument;

use crate::error::{ReliefError, ReliefResult};

use super::messages::{ChatMessage, ChatResponse};
use super::request::{ChatParameters, build_chat_body, parse_chat_response};

/// Configuration for a chat-model provider.
///
/// The API key is injected here at construction time; core logic never reads
/// environment variables or prompts interactively.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Base URL of the chat API
    pub base_url: String,
    /// API key for bearer authentication
    pub api_key: Option<String>,
    /// Model name
    pub model: String,
    /// Sampling parameters
    pub parameters: ChatParameters,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.mistral.ai/v1".to_string(),
            api_key: None,
            model: "mistral-large-latest".to_string(),
            parameters: ChatParameters::default(),
        }
    }
}

/// Trait for chat completion providers
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Send a chat completion request
    async fn chat(&self, messages: &[ChatMessage]) -> ReliefResult<ChatResponse>;
}

/// Mistral chat provider (OpenAI-compatible wire format)
pub struct MistralProvider {
    config: LlmConfig,
    http_client: Client,
}

impl MistralProvider {
    /// Create a new provider with the given configuration
    pub fn new(config: LlmConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    /// Create a new provider reusing an existing HTTP client
    pub fn with_client(config: LlmConfig, http_client: Client) -> Self {
        Self {
            config,
            http_client,
        }
    }

    /// The active configuration
    pub fn config(&self) -> &LlmConfig {
        &self.config
    }
}

#[async_trait]
impl ChatProvider for MistralProvider {
    #[instrument(skip(self, messages), level = "debug")]
    async fn chat(&self, messages: &[ChatMessage]) -> ReliefResult<ChatResponse> {
        let url = format!("{}/chat/completions", self.config.base_url);
        let request_body = build_chat_body(&self.config.model, messages, &self.config.parameters);

        let mut request = self.http_client.post(&url).json(&request_body);
        if let Some(api_key) = &self.config.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ReliefError::llm(format!("Mistral request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(ReliefError::llm(format!(
                "Mistral API error (status {}): {}",
                status, error_text
            )));
        }

        let response_json: Value = response
            .json()
            .await
            .map_err(|e| ReliefError::llm(format!("Failed to parse Mistral response: {}", e)))?;

        parse_chat_response(response_json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LlmConfig::default();
        assert_eq!(config.base_url, "https://api.mistral.ai/v1");
        assert_eq!(config.model, "mistral-large-latest");
        assert_eq!(config.parameters.temperature, Some(0.0));
        assert!(config.api_key.is_none());
    }

    /// Providers stay usable through the trait object seam.
    #[tokio::test]
    async fn test_provider_trait_object() {
        struct CannedProvider;

        #[async_trait]
        impl ChatProvider for CannedProvider {
            async fn chat(&self, _messages: &[ChatMessage]) -> ReliefResult<ChatResponse> {
                Ok(ChatResponse::new("canned"))
            }
        }

        let provider: Box<dyn ChatProvider> = Box::new(CannedProvider);
        let response = provider.chat(&[ChatMessage::user("hi")]).await.unwrap();
        assert_eq!(response.content, "canned");
    }
}
