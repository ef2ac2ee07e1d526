//! REPL 运行器：将 teloxide 消息转换为核心 Message，每条消息在独立任务中交给 HandlerChain 处理。
//! 运行直到进程被中断（Ctrl-C）。

use anyhow::Result;
use bot_core::{HandlerResponse, Message, ToCoreMessage};
use handler_chain::HandlerChain;
use teloxide::prelude::*;
use tracing::{error, info, instrument};

use super::adapters::TelegramMessageWrapper;

/// 用一条核心 Message 驱动 handler chain。失败时记录错误并返回 None（不向用户发送任何内容）。
pub async fn dispatch_message(chain: &HandlerChain, message: &Message) -> Option<HandlerResponse> {
    match chain.handle(message).await {
        Ok(response) => Some(response),
        Err(e) => {
            error!(
                error = %e,
                user_id = message.user.id,
                chat_id = message.chat.id,
                message_id = %message.id,
                "Handler chain failed, no reply sent"
            );
            None
        }
    }
}

/// 使用给定的 teloxide Bot 与 HandlerChain 启动长轮询。
#[instrument(skip(bot, handler_chain))]
pub async fn run_repl(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => info!(username = ?me.user.username, "Connected to Telegram"),
        Err(e) => error!(error = %e, "getMe failed; polling anyway"),
    }

    let chain = handler_chain;
    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = chain.clone();

        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();

            info!(
                user_id = core_msg.user.id,
                chat_id = core_msg.chat.id,
                message_type = %core_msg.message_type,
                "Received message"
            );

            // 每条消息一个任务：慢的 completion 或 speech 调用只会延迟它自己的回复。
            tokio::spawn(async move {
                dispatch_message(&chain, &core_msg).await;
            });

            respond(())
        }
    })
    .await;

    info!("Polling stopped");
    Ok(())
}
