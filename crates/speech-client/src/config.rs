//! Speech configuration loaded from the environment.

use std::env;
use std::time::Duration;

pub const DEFAULT_TTS_API_URL: &str = "https://text-to-speech-api-provider.com/api";

#[derive(Debug, Clone)]
pub struct SpeechConfig {
    /// Full synthesis URL; requests are POSTed here as-is.
    pub endpoint: String,
    pub timeout: Option<Duration>,
}

impl SpeechConfig {
    /// Loads from env: TTS_API_URL, HTTP_TIMEOUT_SECS.
    pub fn from_env() -> Self {
        let endpoint = env::var("TTS_API_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TTS_API_URL.to_string());
        let timeout = env::var("HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);
        Self { endpoint, timeout }
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        env::remove_var("TTS_API_URL");
        env::remove_var("HTTP_TIMEOUT_SECS");
        let config = SpeechConfig::from_env();
        assert_eq!(config.endpoint, DEFAULT_TTS_API_URL);
        assert!(config.timeout.is_none());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        env::set_var("TTS_API_URL", "http://localhost:8080/tts");
        env::set_var("HTTP_TIMEOUT_SECS", "10");
        let config = SpeechConfig::from_env();
        assert_eq!(config.endpoint, "http://localhost:8080/tts");
        assert_eq!(config.timeout, Some(Duration::from_secs(10)));
        env::remove_var("TTS_API_URL");
        env::remove_var("HTTP_TIMEOUT_SECS");
    }
}
