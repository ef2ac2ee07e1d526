use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    /// Missing or unusable configuration (e.g. API key not set), surfaced when first used.
    #[error("Config error: {0}")]
    Config(String),

    /// Network or HTTP-layer failure talking to a remote service.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Remote response did not have the expected shape.
    #[error("Shape error: {0}")]
    Shape(String),

    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),
}

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Empty content")]
    EmptyContent,
}

pub type Result<T> = std::result::Result<T, BotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_kind_and_detail() {
        let e = BotError::Shape("missing audio_url".to_string());
        assert_eq!(e.to_string(), "Shape error: missing audio_url");

        let e: BotError = HandlerError::EmptyContent.into();
        assert_eq!(e.to_string(), "Handler error: Empty content");
    }
}
