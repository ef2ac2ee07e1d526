//! 包装 teloxide::Bot 并实现 [`bot_core::Bot`]。生产环境通过 Telegram 回复；测试中替换为记录调用的 Bot。

use async_trait::async_trait;
use bot_core::{Bot as CoreBot, BotError, Chat, Message, Result};
use teloxide::{
    prelude::*,
    types::{ChatId, InputFile},
};

/// 实现 bot-core Bot trait 的 teloxide::Bot 薄包装。
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

/// Parses the audio URL for `sendAudio`. This is the only check the URL ever gets.
pub fn parse_audio_url(audio_url: &str) -> Result<reqwest::Url> {
    reqwest::Url::parse(audio_url)
        .map_err(|e| BotError::Shape(format!("audio_url is not a valid URL ({}): {}", e, audio_url)))
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn reply_audio(&self, message: &Message, audio_url: &str) -> Result<()> {
        let url = parse_audio_url(audio_url)?;
        self.bot
            .send_audio(ChatId(message.chat.id), InputFile::url(url))
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }
}
