//! # bot-core
//!
//! Core types and traits for the voice bot: [`Bot`], [`Handler`], message and user types,
//! the error taxonomy, and tracing initialization. Transport-agnostic; used by handler-chain
//! and voice-bot.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{BotError, HandlerError, Result};
pub use logger::init_tracing;
pub use types::{Chat, Handler, HandlerResponse, Message, ToCoreMessage, ToCoreUser, User};
