//! Bot abstraction for sending replies.
//!
//! [`Bot`] is transport-agnostic; the Telegram implementation lives in the `voice-bot` crate
//! (`TelegramBotAdapter`), tests substitute recording mocks.

use crate::error::Result;
use crate::types::{Chat, Message};
use async_trait::async_trait;

/// Abstraction for sending text and audio replies. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;

    /// Sends a text reply to the given message (same chat).
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }

    /// Replies with an audio attachment referencing `audio_url`. The URL is passed through to the
    /// transport as-is; the audio itself is never downloaded here.
    async fn reply_audio(&self, message: &Message, audio_url: &str) -> Result<()>;
}
