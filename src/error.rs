//! Application-wide error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),

    #[error("logger error: {0}")]
    Logger(String),

    /// Underlying read or write of a roster file failed.
    #[error("storage error: {0}")]
    Storage(String),

    /// Roster document is not an array of complete student objects.
    #[error("malformed roster data: {0}")]
    Malformed(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
