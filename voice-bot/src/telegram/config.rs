//! Telegram connectivity config: token and optional API URL.
//! Loaded from env: TELEGRAM_TOKEN (or BOT_TOKEN), TELEGRAM_API_URL (or TELOXIDE_API_URL).

use anyhow::Result;
use std::env;

#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
}

impl TelegramConfig {
    /// Loads from env. `token` overrides TELEGRAM_TOKEN / BOT_TOKEN; one of the three is required.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = token
            .or_else(|| env::var("TELEGRAM_TOKEN").ok())
            .or_else(|| env::var("BOT_TOKEN").ok())
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("TELEGRAM_TOKEN (or BOT_TOKEN) not set"))?;
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        Ok(Self {
            bot_token,
            telegram_api_url,
        })
    }

    /// Builds config with the given token; API URL None.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
        }
    }

    /// TELEGRAM_API_URL must be a valid URL if set.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        Ok(())
    }
}
