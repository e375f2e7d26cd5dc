use crate::domain::time_key::TimeKeyError;
use thiserror::Error;

/// Signal trend error types
///
/// The trend core itself never fails; these cover the layers around it.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Date error: {0}")]
    TimeKey(#[from] TimeKeyError),

    #[error("Invalid query: {message}")]
    InvalidQuery { message: String },
}

impl Error {
    pub fn invalid_query(message: impl Into<String>) -> Self {
        Self::InvalidQuery {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
