//! Shared request body builder for OpenAI-compatible chat endpoints
//!
//! Mistral's chat completion API follows the OpenAI wire shape, so the body
//! builder and response parser live here rather than inside the provider.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::{ReliefError, ReliefResult};

use super::messages::{ChatMessage, ChatResponse, ChatUsage};

/// Sampling parameters for a chat completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatParameters {
    /// Temperature (0.0 to 2.0)
    pub temperature: Option<f32>,
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
    /// Top-p sampling
    pub top_p: Option<f32>,
}

impl Default for ChatParameters {
    fn default() -> Self {
        Self {
            temperature: Some(0.0),
            max_tokens: None,
            top_p: None,
        }
    }
}

/// Build an OpenAI-compatible chat completion request body
pub fn build_chat_body(model: &str, messages: &[ChatMessage], params: &ChatParameters) -> Value {
    let mut body = json!({
        "model": model,
        "messages": messages,
    });

    if let Some(temperature) = params.temperature {
        body["temperature"] = json!(temperature);
    }
    if let Some(max_tokens) = params.max_tokens {
        body["max_tokens"] = json!(max_tokens);
    }
    if let Some(top_p) = params.top_p {
        body["top_p"] = json!(top_p);
    }

    body
}

/// Parse an OpenAI-compatible chat completion response body
pub fn parse_chat_response(response_json: Value) -> ReliefResult<ChatResponse> {
    let content = response_json["choices"][0]["message"]["content"]
        .as_str()
        .ok_or_else(|| ReliefError::llm("response contained no message content"))?
        .to_string();

    let model = response_json["model"].as_str().map(String::from);
    let usage = serde_json::from_value::<ChatUsage>(response_json["usage"].clone()).ok();

    Ok(ChatResponse {
        content,
        model,
        usage,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_chat_body() {
        let messages = vec![
            ChatMessage::system("You are a helpful assistant."),
            ChatMessage::user("Snow avalanche total deaths every year?"),
        ];
        let body = build_chat_body("mistral-large-latest", &messages, &ChatParameters::default());

        assert_eq!(body["model"], "mistral-large-latest");
        assert_eq!(body["temperature"], 0.0);
        assert!(body.get("max_tokens").is_none());
        let wire_messages = body["messages"].as_array().unwrap();
        assert_eq!(wire_messages.len(), 2);
        assert_eq!(wire_messages[0]["role"], "system");
        assert_eq!(wire_messages[1]["role"], "user");
    }

    #[test]
    fn test_parse_chat_response() {
        let raw = serde_json::json!({
            "id": "cmpl-123",
            "model": "mistral-large-latest",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "42 deaths."}}
            ],
            "usage": {"prompt_tokens": 100, "completion_tokens": 5, "total_tokens": 105}
        });

        let response = parse_chat_response(raw).unwrap();
        assert_eq!(response.content, "42 deaths.");
        assert_eq!(response.model.as_deref(), Some("mistral-large-latest"));
        assert_eq!(response.usage.unwrap().total_tokens, 105);
    }

    #[test]
    fn test_parse_chat_response_missing_content() {
        let raw = serde_json::json!({"choices": []});
        assert!(parse_chat_response(raw).is_err());
    }
}
