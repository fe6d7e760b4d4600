//! Error handling for YogaTube

use thiserror::Error;

/// Main error type for YogaTube
#[derive(Debug, Error)]
pub enum YogatubeError {
    #[error("HTTP error! status: {0}")]
    HttpStatus(u16),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Failed to parse response: {0}")]
    DecodeError(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    ConfigError(#[from] Box<figment::Error>),

    #[error("mpv not found. Please install mpv or choose the browser player")]
    PlayerNotFound,

    #[error("Player error: {0}")]
    PlayerError(String),
}

impl From<figment::Error> for YogatubeError {
    fn from(e: figment::Error) -> Self {
        YogatubeError::ConfigError(Box::new(e))
    }
}

/// Result alias for catalog and configuration operations
pub type Result<T> = std::result::Result<T, YogatubeError>;
