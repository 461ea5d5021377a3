use thiserror::Error;

#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("failed to serialize contract message: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("invalid coin '{0}', expected <amount><denom>")]
    InvalidCoin(String),

    #[error("failed to decode execute message: {0}")]
    Decode(#[from] prost::DecodeError),

    #[error("unexpected type url '{0}'")]
    UnexpectedTypeUrl(String),
}

pub type Result<T> = std::result::Result<T, ComposeError>;
