//! # voice-bot
//!
//! Telegram bot that turns each text message into an audio reply: the text goes to a chat
//! completion API, the completion goes to a text-to-speech API, and the returned audio URL is
//! sent back to the user. `/start` gets a fixed greeting.
//!
//! Wires bot-core, handler-chain, completion-client and speech-client; loads config from env and
//! runs the teloxide REPL.

pub mod cli;
pub mod components;
pub mod config;
pub mod handlers;
pub mod runner;
pub mod telegram;

pub use cli::{load_config, Cli, Commands};
pub use components::{build_bot_components, build_handler_chain, BotComponents};
pub use config::BotConfig;
pub use handlers::{StartHandler, VoiceReplyHandler, GREETING};
pub use runner::{run_bot, VoiceBot};
pub use telegram::{dispatch_message, run_repl, TelegramBotAdapter, TelegramConfig, TelegramMessageWrapper};
