//! Core types: user, chat, inbound message, handler response, and Handler trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Message type for plain text messages; anything else (photos, stickers, ...) is ignored by the pipeline.
pub const MESSAGE_TYPE_TEXT: &str = "text";

/// User identity (id, username, names).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Chat (group or private) identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

/// A single inbound message. Lives only for the duration of one handler-chain run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: String,
    pub message_type: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn is_text(&self) -> bool {
        self.message_type == MESSAGE_TYPE_TEXT
    }

    /// Returns the bot command name if the text is a command, without the leading `/`
    /// and without any `@botname` suffix: `"/start@my_bot foo"` -> `Some("start")`.
    pub fn command(&self) -> Option<&str> {
        if !self.is_text() {
            return None;
        }
        let first = self.content.split_whitespace().next()?;
        let name = first.strip_prefix('/')?;
        let name = name.split('@').next().unwrap_or(name);
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }
}

/// Handler result for the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Nothing handled the message; returned by the chain when every handler ignored it.
    Continue,
    /// Skip this handler, try next.
    Ignore,
    /// Stop the chain; carries what was sent back (greeting text or audio URL).
    Reply(String),
}

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific message type to core [`Message`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}

/// A message handler. The chain calls `handle` in registration order until one returns
/// [`HandlerResponse::Reply`].
#[async_trait]
pub trait Handler: Send + Sync {
    async fn handle(&self, message: &Message) -> crate::error::Result<HandlerResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_message(content: &str) -> Message {
        Message {
            id: "1".to_string(),
            user: User {
                id: 7,
                username: None,
                first_name: None,
                last_name: None,
            },
            chat: Chat {
                id: 7,
                chat_type: "private".to_string(),
            },
            content: content.to_string(),
            message_type: MESSAGE_TYPE_TEXT.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_command_parsing() {
        assert_eq!(text_message("/start").command(), Some("start"));
        assert_eq!(text_message("/start@voice_bot").command(), Some("start"));
        assert_eq!(text_message("/help me please").command(), Some("help"));
        assert_eq!(text_message("hello /start").command(), None);
        assert_eq!(text_message("Hello").command(), None);
        assert_eq!(text_message("/").command(), None);
        assert_eq!(text_message("").command(), None);
    }

    #[test]
    fn test_non_text_message_has_no_command() {
        let mut msg = text_message("/start");
        msg.message_type = "photo".to_string();
        assert!(!msg.is_text());
        assert_eq!(msg.command(), None);
    }
}
