use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("event source error: {0}")]
    EventSource(String),

    #[error("event decode error: {0}")]
    Decode(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid campaign draft: {0}")]
    InvalidDraft(String),

    #[error("invalid amount: {0}")]
    InvalidAmount(String),
}

impl Error {
    /// Whether this error came out of a log query (transport, RPC or ABI decoding).
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, Error::EventSource(_) | Error::Decode(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
