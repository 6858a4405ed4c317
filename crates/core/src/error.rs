//! Storage error types

use thiserror::Error;

/// Errors raised by [`crate::TokenStore`] backends
#[derive(Error, Debug)]
pub enum StorageError {
    /// The backing store cannot be reached (no window, private mode, quota)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The persisted document could not be parsed
    #[error("Corrupt token store: {0}")]
    Corrupt(#[from] serde_json::Error),
}

pub type StorageResult<T> = std::result::Result<T, StorageError>;
