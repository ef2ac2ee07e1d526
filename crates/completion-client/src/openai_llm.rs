//! OpenAI 兼容的 LlmClient：每次调用发送一次非流式 chat completion 请求，不重试。
//!
//! 请求体使用 async-openai 的请求类型序列化；响应只解析 `choices[0].message.content`
//! （以及可选的 usage），其余字段一概忽略。

use async_openai::types::CreateChatCompletionRequestArgs;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info, instrument};

use crate::messages::{build_messages, to_openai};
use crate::{mask_token, CompletionConfig, CompletionError, LlmClient};

/// 基于 reqwest 的 completion 客户端。clone 开销很小，内部 HTTP 连接池共享。
#[derive(Clone)]
pub struct OpenAICompletionClient {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    /// 未设置时在调用时返回 Config 错误；日志中只输出掩码后的值。
    api_key: Option<String>,
}

/// 响应中唯一被信任的部分。
#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: Option<u32>,
    completion_tokens: Option<u32>,
    total_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl OpenAICompletionClient {
    /// 根据配置构建客户端。不检查 API key，见 [`LlmClient::get_completion`]。
    pub fn new(config: &CompletionConfig) -> Result<Self, CompletionError> {
        let mut http = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            http = http.timeout(timeout);
        }
        let client = http
            .build()
            .map_err(|e| CompletionError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: format!("{}/chat/completions", config.api_base.trim_end_matches('/')),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Extracts the reply text from a 2xx body. Anything that is not `choices[0].message.content`
/// as a string is a shape error.
fn parse_completion(body: &str) -> Result<String, CompletionError> {
    let response: CompletionResponse = serde_json::from_str(body)
        .map_err(|e| CompletionError::Shape(format!("body is not a chat completion: {}", e)))?;

    if let Some(u) = &response.usage {
        info!(
            prompt_tokens = ?u.prompt_tokens,
            completion_tokens = ?u.completion_tokens,
            total_tokens = ?u.total_tokens,
            "chat completion usage"
        );
    }

    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| CompletionError::Shape("response has no choices".to_string()))?;
    choice
        .message
        .and_then(|m| m.content)
        .ok_or_else(|| CompletionError::Shape("first choice has no message content".to_string()))
}

/// Describes a non-2xx reply, preferring the API's own `error.message` when present.
fn describe_api_error(status: reqwest::StatusCode, body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => format!("API error ({}): {}", status, parsed.error.message),
        Err(_) => format!("API error ({})", status),
    }
}

#[async_trait]
impl LlmClient for OpenAICompletionClient {
    #[instrument(skip(self, message), fields(model = %self.model))]
    async fn get_completion(&self, message: &str) -> Result<String, CompletionError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| CompletionError::Config("GPT_API_KEY not set".to_string()))?;

        let messages = build_messages(message)
            .iter()
            .map(to_openai)
            .collect::<Result<Vec<_>, _>>()?;

        info!(
            model = %self.model,
            message_count = messages.len(),
            api_key = %mask_token(api_key),
            "chat completion request"
        );

        let request = CreateChatCompletionRequestArgs::default()
            .model(self.model.as_str())
            .messages(messages)
            .build()?;

        if let Ok(json) = serde_json::to_string(&request) {
            debug!(request_json = %json, "chat completion request JSON");
        }

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!(status = %status, body_len = body.len(), "chat completion response received");

        if !status.is_success() {
            return Err(CompletionError::Transport(describe_api_error(status, &body)));
        }

        parse_completion(&body)
    }
}
