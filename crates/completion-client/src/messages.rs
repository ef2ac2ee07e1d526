//! Request messages: role/content pairs and their conversion to the async-openai wire types.

use async_openai::error::OpenAIError;
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestUserMessageArgs,
};

/// Fixed system prompt sent before every user message.
pub const SYSTEM_PROMPT: &str = "You are ChatGPT.";

/// Role of a message; the subset of Chat Completions API `role` values a single-turn request uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    System,
    User,
}

/// One element of the `messages` array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// The request conversation for one user message: system prompt, then the text verbatim.
pub fn build_messages(message: &str) -> Vec<ChatMessage> {
    vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(message)]
}

/// Converts a single [`ChatMessage`] into the OpenAI API message format.
pub(crate) fn to_openai(msg: &ChatMessage) -> Result<ChatCompletionRequestMessage, OpenAIError> {
    let content = msg.content.clone();
    let openai_msg: ChatCompletionRequestMessage = match msg.role {
        MessageRole::System => ChatCompletionRequestSystemMessageArgs::default()
            .content(content)
            .build()?
            .into(),
        MessageRole::User => ChatCompletionRequestUserMessageArgs::default()
            .content(content)
            .build()?
            .into(),
    };
    Ok(openai_msg)
}
