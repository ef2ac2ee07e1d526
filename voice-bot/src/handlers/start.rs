//! `/start` command: fixed greeting, no remote calls.

use async_trait::async_trait;
use bot_core::{Bot, Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::info;

pub const START_COMMAND: &str = "start";

pub const GREETING: &str = "Hello! I'm your ChatGPT bot. Send me a message and I'll respond.";

/// Replies [`GREETING`] to `/start` (also `/start@botname`); ignores everything else.
pub struct StartHandler {
    bot: Arc<dyn Bot>,
}

impl StartHandler {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Handler for StartHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if message.command() != Some(START_COMMAND) {
            return Ok(HandlerResponse::Ignore);
        }
        self.bot.reply_to(message, GREETING).await?;
        info!(user_id = message.user.id, chat_id = message.chat.id, "Greeting sent");
        Ok(HandlerResponse::Reply(GREETING.to_string()))
    }
}
