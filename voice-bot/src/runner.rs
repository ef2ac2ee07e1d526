use anyhow::Result;
use bot_core::{init_tracing, HandlerResponse, Message};
use handler_chain::HandlerChain;
use tracing::{info, instrument, warn};

use crate::components::{build_bot_components, build_handler_chain, BotComponents};
use crate::config::BotConfig;
use crate::telegram::{dispatch_message, run_repl};

/// VoiceBot: config, components, and the handler chain built from them.
pub struct VoiceBot {
    pub config: BotConfig,
    pub components: BotComponents,
    pub handler_chain: HandlerChain,
}

impl VoiceBot {
    pub fn new(config: BotConfig) -> Result<Self> {
        let components = build_bot_components(&config)?;
        Ok(Self::with_components(config, components))
    }

    /// Builds the bot around pre-built components (e.g. mocks in tests).
    pub fn with_components(config: BotConfig, components: BotComponents) -> Self {
        let handler_chain = build_handler_chain(
            components.bot.clone(),
            components.llm_client.clone(),
            components.speech_client.clone(),
        );
        Self {
            config,
            components,
            handler_chain,
        }
    }

    /// Handles one core Message through the same dispatch path the REPL uses for each update.
    /// Returns the chain's response, or None when it failed (nothing was sent).
    pub async fn handle_core_message(&self, message: &Message) -> Option<HandlerResponse> {
        dispatch_message(&self.handler_chain, message).await
    }

    /// Runs long polling until interrupted.
    pub async fn run(self) -> Result<()> {
        run_repl(self.components.teloxide_bot.clone(), self.handler_chain).await
    }
}

/// Main entry: validate config, init logging, build components, run the REPL.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.log_file)?;

    if config.completion.api_key.is_none() {
        // Not fatal: each message will fail with a config error until the key is set.
        warn!("GPT_API_KEY not set; completion requests will fail");
    }

    let bot = VoiceBot::new(config)?;
    info!(log_file = %bot.config.log_file, "Bot started");
    bot.run().await
}
