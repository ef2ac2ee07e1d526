//! BotConfig：启动时加载一次，再交给需要它的组件。
//!
//! Telegram 连接与日志路径在此定义；completion 与 speech 配置来自各自的 crate
//! （[`CompletionConfig`]、[`SpeechConfig`]）。

use anyhow::Result;
use completion_client::CompletionConfig;
use speech_client::SpeechConfig;
use std::env;

use crate::telegram::TelegramConfig;

pub const DEFAULT_LOG_FILE: &str = "logs/voice-bot.log";

#[derive(Debug, Clone)]
pub struct BotConfig {
    pub telegram: TelegramConfig,
    pub completion: CompletionConfig,
    pub speech: SpeechConfig,
    /// LOG_FILE
    pub log_file: String,
}

impl BotConfig {
    /// Loads from env. `token` overrides TELEGRAM_TOKEN. A missing GPT_API_KEY is not an
    /// error here; it surfaces on the first completion call.
    pub fn load(token: Option<String>) -> Result<Self> {
        let telegram = TelegramConfig::load(token)?;
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
        Ok(Self {
            telegram,
            completion: CompletionConfig::from_env(),
            speech: SpeechConfig::from_env(),
            log_file,
        })
    }

    /// Call after load() to fail fast before connecting.
    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()?;
        if reqwest::Url::parse(&self.speech.endpoint).is_err() {
            anyhow::bail!("TTS_API_URL is not a valid URL: {}", self.speech.endpoint);
        }
        if reqwest::Url::parse(&self.completion.api_base).is_err() {
            anyhow::bail!("GPT_API_URL is not a valid URL: {}", self.completion.api_base);
        }
        Ok(())
    }

    pub fn bot_token(&self) -> &str {
        &self.telegram.bot_token
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "TELEGRAM_TOKEN",
        "BOT_TOKEN",
        "TELEGRAM_API_URL",
        "TELOXIDE_API_URL",
        "GPT_API_KEY",
        "OPENAI_API_KEY",
        "GPT_API_URL",
        "OPENAI_BASE_URL",
        "TTS_API_URL",
        "LOG_FILE",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_load_requires_telegram_token() {
        clear_env();
        assert!(BotConfig::load(None).is_err());
    }

    #[test]
    #[serial]
    fn test_load_without_api_key_succeeds() {
        clear_env();
        env::set_var("TELEGRAM_TOKEN", "123:abc");

        let config = BotConfig::load(None).unwrap();
        assert_eq!(config.bot_token(), "123:abc");
        assert!(config.completion.api_key.is_none());
        assert_eq!(config.log_file, DEFAULT_LOG_FILE);
        assert!(config.validate().is_ok());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_cli_token_overrides_env_and_bot_token_is_fallback() {
        clear_env();
        env::set_var("BOT_TOKEN", "from_bot_token");
        assert_eq!(BotConfig::load(None).unwrap().bot_token(), "from_bot_token");

        env::set_var("TELEGRAM_TOKEN", "from_telegram_token");
        assert_eq!(
            BotConfig::load(None).unwrap().bot_token(),
            "from_telegram_token"
        );
        assert_eq!(
            BotConfig::load(Some("from_cli".to_string()))
                .unwrap()
                .bot_token(),
            "from_cli"
        );
        clear_env();
    }

    #[test]
    #[serial]
    fn test_validate_rejects_bad_tts_url() {
        clear_env();
        env::set_var("TELEGRAM_TOKEN", "123:abc");
        env::set_var("TTS_API_URL", "text-to-speech");

        let config = BotConfig::load(None).unwrap();
        assert!(config.validate().is_err());
        clear_env();
    }
}
