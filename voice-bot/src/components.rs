//! 组件工厂：根据配置构建客户端、Telegram bot 与 handler chain。

use anyhow::{Context, Result};
use bot_core::Bot as CoreBot;
use completion_client::{LlmClient, OpenAICompletionClient};
use handler_chain::HandlerChain;
use speech_client::{HttpSpeechClient, SpeechClient};
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{info, instrument};

use crate::config::BotConfig;
use crate::handlers::{StartHandler, VoiceReplyHandler};
use crate::telegram::TelegramBotAdapter;

/// 运行器所需的全部组件，启动时构建一次。
#[derive(Clone)]
pub struct BotComponents {
    pub teloxide_bot: Bot,
    pub bot: Arc<dyn CoreBot>,
    pub llm_client: Arc<dyn LlmClient>,
    pub speech_client: Arc<dyn SpeechClient>,
}

/// 根据配置构建组件。不会访问 Telegram 或任何 API。
#[instrument(skip(config))]
pub fn build_bot_components(config: &BotConfig) -> Result<BotComponents> {
    let teloxide_bot = {
        let bot = Bot::new(config.bot_token());
        match config.telegram.telegram_api_url {
            Some(ref url_str) => {
                let url = reqwest::Url::parse(url_str)
                    .with_context(|| format!("Invalid TELEGRAM_API_URL: {}", url_str))?;
                bot.set_api_url(url)
            }
            None => bot,
        }
    };

    let llm_client = OpenAICompletionClient::new(&config.completion)
        .context("Failed to build completion client")?;
    let speech_client =
        HttpSpeechClient::new(&config.speech).context("Failed to build speech client")?;

    info!(
        model = %llm_client.model(),
        completion_api = %config.completion.api_base,
        speech_api = %speech_client.endpoint(),
        "Components built"
    );

    Ok(BotComponents {
        bot: Arc::new(TelegramBotAdapter::new(teloxide_bot.clone())),
        teloxide_bot,
        llm_client: Arc::new(llm_client),
        speech_client: Arc::new(speech_client),
    })
}

/// `/start` greeting first, then the voice pipeline for every other text message.
pub fn build_handler_chain(
    bot: Arc<dyn CoreBot>,
    llm_client: Arc<dyn LlmClient>,
    speech_client: Arc<dyn SpeechClient>,
) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(StartHandler::new(bot.clone())))
        .add_handler(Arc::new(VoiceReplyHandler::new(
            llm_client,
            speech_client,
            bot,
        )))
}
