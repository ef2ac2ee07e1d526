//! # Completion client
//!
//! Sends a single user message to an OpenAI-compatible chat completion API and returns the
//! generated text. [`LlmClient`] is the seam the message pipeline depends on;
//! [`OpenAICompletionClient`] is the implementation: request types from async-openai, sent with
//! reqwest, and only `choices[0].message.content` read back.
//!
//! Also provides token masking for safe logging.

use async_trait::async_trait;

mod config;
mod error;
mod messages;
mod openai_llm;

pub use config::CompletionConfig;
pub use error::CompletionError;
pub use messages::{build_messages, ChatMessage, MessageRole, SYSTEM_PROMPT};
pub use openai_llm::OpenAICompletionClient;

/// Completion interface: one user message in, the model's reply text out.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Returns the reply for `message`, sent after the fixed system prompt.
    async fn get_completion(&self, message: &str) -> Result<String, CompletionError>;
}

/// Masks an API key/token for safe logging: shows first 7 chars + "***" + last 4 chars.
/// If length <= 11, returns "***" to avoid leaking any part of the key.
pub fn mask_token(token: &str) -> String {
    let len = token.len();
    if len <= 11 || !token.is_char_boundary(7) || !token.is_char_boundary(len - 4) {
        return "***".to_string();
    }
    format!("{}***{}", &token[..7], &token[len - 4..])
}
