// src/errors.rs
//
// Error type shared by the config loader, the factory and the snapshot writer.
// Path generation itself is total and never returns one of these.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummonError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("config error: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("failed to serialize snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SummonResult<T> = Result<T, SummonError>;
