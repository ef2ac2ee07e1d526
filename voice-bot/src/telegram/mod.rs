//! Telegram layer: adapters, Bot implementation, connectivity config, REPL runner.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper, MESSAGE_TYPE_NON_TEXT};
pub use bot_adapter::{parse_audio_url, TelegramBotAdapter};
pub use config::TelegramConfig;
pub use runner::{dispatch_message, run_repl};
