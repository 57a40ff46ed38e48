//! Catalog error types

use thiserror::Error;

use crate::storage::StorageError;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors from the book catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Create payload had no usable title
    #[error("book title is required")]
    MissingTitle,

    /// Book could not be serialized for the log
    #[error("failed to encode book: {0}")]
    Encoding(#[from] serde_json::Error),

    /// The document log failed
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Shared state was poisoned by a panicking writer
    #[error("catalog lock poisoned")]
    LockPoisoned,
}
