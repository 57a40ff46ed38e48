//! CLI error types

use thiserror::Error;

use crate::catalog::CatalogError;

/// Result type for CLI commands
pub type CliResult<T> = Result<T, CliError>;

/// Errors surfaced at the command line
#[derive(Debug, Error)]
pub enum CliError {
    /// Opening the catalog at startup failed
    #[error("failed to open catalog: {0}")]
    Catalog(#[from] CatalogError),

    /// Boot failed before or while serving
    #[error("boot failed: {0}")]
    BootFailed(String),
}

impl CliError {
    pub fn boot_failed(reason: impl Into<String>) -> Self {
        CliError::BootFailed(reason.into())
    }
}
