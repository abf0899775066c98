//! Zahlentrainer Error Types
//!
//! Centralized error handling for the library.

use thiserror::Error;

/// Central error type for Zahlentrainer
#[derive(Error, Debug)]
pub enum TrainerError {
    #[error("number {0} is outside the supported range 0..=999")]
    OutOfRange(i64),

    #[error("round already answered, start the next one first")]
    RoundClosed,

    #[error("TTS engine error: {0}")]
    Tts(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Zahlentrainer operations
pub type TrainerResult<T> = Result<T, TrainerError>;
