//! # Speech client
//!
//! Sends text to a text-to-speech service and returns the URL of the hosted audio it produced.
//! The URL is opaque: it is neither downloaded nor checked here.
//!
//! Wire format: `POST <endpoint>` with body `{"text": ...}`, response `{"audio_url": ...}`.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, instrument};

mod config;

pub use config::SpeechConfig;

#[derive(Error, Debug)]
pub enum SpeechError {
    /// Network failure or non-2xx status.
    #[error("speech request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Body is not JSON or has no string `audio_url`.
    #[error("unexpected speech response: {0}")]
    Shape(String),
}

/// Speech interface: text in, audio URL out.
#[async_trait]
pub trait SpeechClient: Send + Sync {
    async fn get_speech_url(&self, text: &str) -> Result<String, SpeechError>;
}

#[derive(Debug, Serialize)]
struct SpeechRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct SpeechResponse {
    audio_url: Option<String>,
}

/// reqwest-backed [`SpeechClient`]. No authentication header is sent.
#[derive(Clone)]
pub struct HttpSpeechClient {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpSpeechClient {
    pub fn new(config: &SpeechConfig) -> Result<Self, SpeechError> {
        Ok(Self {
            endpoint: config.endpoint.clone(),
            client: build_http_client(config.timeout)?,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn build_http_client(timeout: Option<Duration>) -> Result<reqwest::Client, SpeechError> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

/// Extracts `audio_url` from a response body.
fn parse_audio_url(body: &str) -> Result<String, SpeechError> {
    let parsed: SpeechResponse = serde_json::from_str(body)
        .map_err(|e| SpeechError::Shape(format!("body is not a speech response: {}", e)))?;
    parsed
        .audio_url
        .ok_or_else(|| SpeechError::Shape("missing audio_url".to_string()))
}

#[async_trait]
impl SpeechClient for HttpSpeechClient {
    #[instrument(skip(self, text), fields(endpoint = %self.endpoint, text_len = text.len()))]
    async fn get_speech_url(&self, text: &str) -> Result<String, SpeechError> {
        info!("speech synthesis request");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&SpeechRequest { text })
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        debug!(body_len = body.len(), "speech response received");

        let audio_url = parse_audio_url(&body)?;
        info!(audio_url = %audio_url, "speech synthesis completed");
        Ok(audio_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_audio_url() {
        assert_eq!(
            parse_audio_url(r#"{"audio_url":"http://x/audio.mp3","duration":1.5}"#).unwrap(),
            "http://x/audio.mp3"
        );
    }

    #[test]
    fn test_parse_audio_url_shape_errors() {
        assert!(matches!(parse_audio_url("{}"), Err(SpeechError::Shape(_))));
        assert!(matches!(
            parse_audio_url(r#"{"audio_url":42}"#),
            Err(SpeechError::Shape(_))
        ));
        assert!(matches!(
            parse_audio_url("<html>oops</html>"),
            Err(SpeechError::Shape(_))
        ));
    }

    #[test]
    fn test_request_serializes_text_only() {
        let json = serde_json::to_value(SpeechRequest { text: "Hi there!" }).unwrap();
        assert_eq!(json, serde_json::json!({ "text": "Hi there!" }));
    }
}
