//! Message pipeline: text -> completion -> speech -> audio reply.
//!
//! Each step runs only after the previous one succeeded, so a failed completion never reaches
//! the speech service. Failures are returned, not answered: the user gets no reply at all, and
//! the error is logged here and again by the runner.

use async_trait::async_trait;
use bot_core::{Bot, BotError, Handler, HandlerError, HandlerResponse, Message, Result};
use completion_client::{CompletionError, LlmClient};
use speech_client::{SpeechClient, SpeechError};
use std::sync::Arc;
use tracing::{error, info, instrument};

fn from_completion_error(e: CompletionError) -> BotError {
    match e {
        CompletionError::Config(msg) => BotError::Config(msg),
        CompletionError::Transport(e) => BotError::Transport(format!("completion: {}", e)),
        CompletionError::Shape(msg) => BotError::Shape(format!("completion: {}", msg)),
    }
}

fn from_speech_error(e: SpeechError) -> BotError {
    match e {
        SpeechError::Transport(e) => BotError::Transport(format!("speech: {}", e)),
        SpeechError::Shape(msg) => BotError::Shape(format!("speech: {}", msg)),
    }
}

/// Answers every non-command text message with an audio reply of the LLM's answer.
pub struct VoiceReplyHandler {
    llm_client: Arc<dyn LlmClient>,
    speech_client: Arc<dyn SpeechClient>,
    bot: Arc<dyn Bot>,
}

impl VoiceReplyHandler {
    pub fn new(
        llm_client: Arc<dyn LlmClient>,
        speech_client: Arc<dyn SpeechClient>,
        bot: Arc<dyn Bot>,
    ) -> Self {
        Self {
            llm_client,
            speech_client,
            bot,
        }
    }

    /// Runs the pipeline for one message and returns the audio URL that was sent.
    ///
    /// The completion text goes to the speech service unchanged and is never sent to the user.
    #[instrument(skip(self, message), fields(user_id = message.user.id, message_id = %message.id))]
    pub async fn handle_text_message(&self, message: &Message) -> Result<String> {
        let text = message.content.as_str();
        if text.is_empty() {
            return Err(HandlerError::EmptyContent.into());
        }

        info!(text_len = text.len(), "step: requesting completion");
        let completion = self
            .llm_client
            .get_completion(text)
            .await
            .map_err(from_completion_error)
            .inspect_err(|e| error!(error = %e, "Completion failed"))?;

        info!(completion_len = completion.len(), "step: requesting speech");
        let audio_url = self
            .speech_client
            .get_speech_url(&completion)
            .await
            .map_err(from_speech_error)
            .inspect_err(|e| error!(error = %e, "Speech synthesis failed"))?;

        info!(audio_url = %audio_url, "step: sending audio reply");
        self.bot
            .reply_audio(message, &audio_url)
            .await
            .inspect_err(|e| error!(error = %e, "Failed to send audio reply"))?;

        Ok(audio_url)
    }
}

#[async_trait]
impl Handler for VoiceReplyHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !message.is_text() || message.command().is_some() {
            return Ok(HandlerResponse::Ignore);
        }
        let audio_url = self.handle_text_message(message).await?;
        Ok(HandlerResponse::Reply(audio_url))
    }
}
