//! Error types for the remind crates.

use thiserror::Error;

/// Errors that can occur in remind operations.
#[derive(Error, Debug)]
pub enum RemindError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No event with id {id}; valid ids are 1 to {count}")]
    EventOutOfRange { id: usize, count: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for remind operations.
pub type RemindResult<T> = Result<T, RemindError>;
