use shuttle_runtime::Error as ShuttleError;
use teloxide::RequestError;

use crate::{config::ConfigError, storage::StorageError};

#[derive(Debug, thiserror::Error)]
pub enum BotError {
    #[error("Dialogue state error: {0}")]
    DialogueStateError(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error(transparent)]
    Send(#[from] SendError),

    #[error(transparent)]
    Other(anyhow::Error),
}

/// Outbound delivery failure reported by the messaging gateway.
#[derive(Debug, thiserror::Error)]
#[error("Failed to send message: {0}")]
pub struct SendError(pub String);

impl From<RequestError> for SendError {
    fn from(error: RequestError) -> Self {
        SendError(error.to_string())
    }
}

impl From<BotError> for ShuttleError {
    fn from(error: BotError) -> Self {
        ShuttleError::Custom(anyhow::anyhow!(error))
    }
}

impl From<anyhow::Error> for BotError {
    fn from(error: anyhow::Error) -> Self {
        BotError::Other(error)
    }
}

pub type HandlerResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

pub type BotResult<T> = Result<T, BotError>;
