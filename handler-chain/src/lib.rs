//! # Handler chain
//!
//! Runs the registered handlers for each inbound message, in registration order. The first
//! handler that returns [`HandlerResponse::Reply`] ends processing; errors abort the chain and
//! are returned to the caller untouched.

use bot_core::{Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Ordered list of handlers. Cheap to clone; handlers are shared.
#[derive(Clone, Default)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
}

impl HandlerChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a handler (runs in order; first Reply ends the chain).
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Runs handlers until one replies. Returns that Reply, or Continue if every handler ignored the message.
    #[instrument(skip(self, message), fields(message_id = %message.id))]
    pub async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            "step: handler_chain started"
        );

        for handler in &self.handlers {
            let handler_name = std::any::type_name_of_val(handler.as_ref());
            debug!(handler = %handler_name, "step: handler processing");

            let response = handler.handle(message).await?;

            match response {
                HandlerResponse::Reply(ref body) => {
                    info!(
                        user_id = message.user.id,
                        handler = %handler_name,
                        reply_len = body.len(),
                        "step: handler replied, chain stopped"
                    );
                    return Ok(response);
                }
                HandlerResponse::Ignore | HandlerResponse::Continue => {
                    debug!(handler = %handler_name, response = ?response, "step: handler passed");
                }
            }
        }

        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            "step: handler_chain finished without reply"
        );
        Ok(HandlerResponse::Continue)
    }
}

// Tests live in tests/handler_chain_test.rs
