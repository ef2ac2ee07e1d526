use async_openai::error::OpenAIError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompletionError {
    /// API key missing or request could not be built; reported on first use, not at startup.
    #[error("completion config error: {0}")]
    Config(String),

    /// Network failure or non-2xx status.
    #[error("completion request failed: {0}")]
    Transport(String),

    /// 2xx body that is not JSON or lacks `choices[0].message.content`.
    #[error("unexpected completion response: {0}")]
    Shape(String),
}

impl From<reqwest::Error> for CompletionError {
    fn from(e: reqwest::Error) -> Self {
        CompletionError::Transport(e.to_string())
    }
}

/// async-openai is only used to build the request, so its errors are request-building errors.
impl From<OpenAIError> for CompletionError {
    fn from(e: OpenAIError) -> Self {
        CompletionError::Config(format!("invalid completion request: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_error_maps_to_config() {
        let err: CompletionError = OpenAIError::InvalidArgument("messages empty".to_string()).into();
        assert!(matches!(err, CompletionError::Config(_)));
        assert!(err.to_string().contains("messages empty"));
    }
}
