//! Recording mocks of [`bot_core::Bot`], [`completion_client::LlmClient`] and
//! [`speech_client::SpeechClient`] for pipeline tests.
//!
//! All three write into one shared call log so tests can assert on the exact order of calls.

#![allow(dead_code)] // each test binary uses a different subset

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bot_core::{Bot, Chat, Message, Result, User};
use completion_client::{CompletionError, LlmClient};
use speech_client::{SpeechClient, SpeechError};

/// One observed call, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Completion(String),
    Speech(String),
    Text { chat_id: i64, text: String },
    Audio { chat_id: i64, url: String },
}

pub type CallLog = Arc<Mutex<Vec<Call>>>;

pub fn new_log() -> CallLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn calls(log: &CallLog) -> Vec<Call> {
    log.lock().unwrap().clone()
}

/// Bot that records text and audio replies instead of sending them.
pub struct RecordingBot {
    log: CallLog,
}

impl RecordingBot {
    pub fn new(log: CallLog) -> Arc<Self> {
        Arc::new(Self { log })
    }
}

#[async_trait]
impl Bot for RecordingBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.log.lock().unwrap().push(Call::Text {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn reply_audio(&self, message: &Message, audio_url: &str) -> Result<()> {
        self.log.lock().unwrap().push(Call::Audio {
            chat_id: message.chat.id,
            url: audio_url.to_string(),
        });
        Ok(())
    }
}

/// Outcome a mock client returns for every call.
#[derive(Debug, Clone)]
pub enum Outcome {
    Ok(String),
    TransportFailure,
    ShapeFailure,
}

pub struct MockLlmClient {
    outcome: Outcome,
    log: CallLog,
}

impl MockLlmClient {
    pub fn new(outcome: Outcome, log: CallLog) -> Arc<Self> {
        Arc::new(Self { outcome, log })
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn get_completion(&self, message: &str) -> std::result::Result<String, CompletionError> {
        self.log
            .lock()
            .unwrap()
            .push(Call::Completion(message.to_string()));
        match &self.outcome {
            Outcome::Ok(text) => Ok(text.clone()),
            Outcome::TransportFailure => {
                Err(CompletionError::Transport("connection refused".to_string()))
            }
            Outcome::ShapeFailure => Err(CompletionError::Shape("response has no choices".to_string())),
        }
    }
}

pub struct MockSpeechClient {
    outcome: Outcome,
    log: CallLog,
}

impl MockSpeechClient {
    pub fn new(outcome: Outcome, log: CallLog) -> Arc<Self> {
        Arc::new(Self { outcome, log })
    }
}

#[async_trait]
impl SpeechClient for MockSpeechClient {
    async fn get_speech_url(&self, text: &str) -> std::result::Result<String, SpeechError> {
        self.log.lock().unwrap().push(Call::Speech(text.to_string()));
        match &self.outcome {
            Outcome::Ok(url) => Ok(url.clone()),
            Outcome::TransportFailure | Outcome::ShapeFailure => {
                Err(SpeechError::Shape("missing audio_url".to_string()))
            }
        }
    }
}

pub const TEST_USER_ID: i64 = 123456;
pub const TEST_CHAT_ID: i64 = 123456;

pub fn text_message(content: &str) -> Message {
    Message {
        id: "test_msg_1".to_string(),
        user: User {
            id: TEST_USER_ID,
            username: Some("testuser".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: TEST_CHAT_ID,
            chat_type: "private".to_string(),
        },
        content: content.to_string(),
        message_type: "text".to_string(),
        created_at: chrono::Utc::now(),
    }
}

pub fn non_text_message() -> Message {
    let mut msg = text_message("");
    msg.message_type = "non_text".to_string();
    msg
}
