//! Adapters from Telegram (teloxide) types to bot_core types.

use bot_core::types::MESSAGE_TYPE_TEXT;
use bot_core::{Chat, Message, ToCoreMessage, ToCoreUser, User};

/// Message type recorded for updates without text (photos, stickers, voice, ...).
pub const MESSAGE_TYPE_NON_TEXT: &str = "non_text";

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Wraps a teloxide Message for conversion to core [`Message`].
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        let (content, message_type) = match self.0.text() {
            Some(text) => (text.to_string(), MESSAGE_TYPE_TEXT),
            None => (String::new(), MESSAGE_TYPE_NON_TEXT),
        };
        Message {
            id: self.0.id.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(|| User {
                    id: 0,
                    username: None,
                    first_name: None,
                    last_name: None,
                }),
            chat: Chat {
                id: self.0.chat.id.0,
                chat_type: if self.0.chat.is_private() {
                    "private".to_string()
                } else {
                    "group".to_string()
                },
            },
            content,
            message_type: message_type.to_string(),
            created_at: self.0.date,
        }
    }
}
