//! Storage error types

use std::io;
use thiserror::Error;

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors from the document log
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying file I/O failed
    #[error("storage I/O error: {0}")]
    Io(#[from] io::Error),

    /// A record failed checksum verification or could not be decoded
    #[error("corrupt record at offset {offset}: {reason}")]
    Corrupt { offset: u64, reason: String },

    /// The log ends mid-record
    #[error("truncated record at offset {offset}")]
    Truncated { offset: u64 },
}

impl StorageError {
    pub fn corrupt(offset: u64, reason: impl Into<String>) -> Self {
        StorageError::Corrupt {
            offset,
            reason: reason.into(),
        }
    }
}
