//! Chat-model integration
//!
//! Message types, a shared chat-completion request builder, and the provider
//! seam with a Mistral implementation.

mod messages;
mod provider;
mod request;

pub use messages::{ChatMessage, ChatResponse, ChatUsage, MessageRole};
pub use provider::{ChatProvider, LlmConfig, MistralProvider};
pub use request::{ChatParameters, build_chat_body, parse_chat_response};
