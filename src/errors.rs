use thiserror::Error;

#[derive(Debug, Error)]
pub enum BotError {
    #[error("{0}")]
    Config(String),
    #[error("{0}")]
    Network(String),
    #[error("{0}")]
    Decode(String),
    #[error("{0}")]
    Store(String),
    #[error("{0}")]
    Telegram(String),
}

impl From<std::io::Error> for BotError {
    fn from(value: std::io::Error) -> Self {
        BotError::Store(format!("I/O error: {value}"))
    }
}

impl From<serde_json::Error> for BotError {
    fn from(value: serde_json::Error) -> Self {
        BotError::Decode(format!("JSON error: {value}"))
    }
}

impl From<reqwest::Error> for BotError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_timeout() {
            return BotError::Network("request timed out".to_string());
        }
        if value.is_decode() {
            return BotError::Decode(format!("undecodable response body: {value}"));
        }
        BotError::Network(format!("network request failed: {value}"))
    }
}

impl From<teloxide::RequestError> for BotError {
    fn from(value: teloxide::RequestError) -> Self {
        BotError::Telegram(format!("Telegram request failed: {value}"))
    }
}
