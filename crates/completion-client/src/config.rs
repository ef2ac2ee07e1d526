//! Completion 配置：从环境变量加载。

use std::env;
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Completion API 配置。此处 key 可为空：缺失只在实际调用客户端时报告
/// （[`crate::CompletionError::Config`]）。
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    pub api_key: Option<String>,
    /// API base; requests go to `{api_base}/chat/completions`.
    pub api_base: String,
    pub model: String,
    /// Per-request timeout. None means the HTTP client's default (no timeout).
    pub timeout: Option<Duration>,
}

impl CompletionConfig {
    /// 从环境变量加载：GPT_API_KEY（或 OPENAI_API_KEY）、GPT_API_URL（或 OPENAI_BASE_URL）、
    /// MODEL、HTTP_TIMEOUT_SECS。不会失败；未设置的项使用默认值。
    pub fn from_env() -> Self {
        let api_key = env::var("GPT_API_KEY")
            .or_else(|_| env::var("OPENAI_API_KEY"))
            .ok()
            .filter(|s| !s.trim().is_empty());
        let api_base = env::var("GPT_API_URL")
            .or_else(|_| env::var("OPENAI_BASE_URL"))
            .unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let model = env::var("MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let timeout = env::var("HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);
        Self {
            api_key,
            api_base,
            model,
            timeout,
        }
    }

    /// Config with the given key and defaults for everything else.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            api_base: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: None,
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }
}
