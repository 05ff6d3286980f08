//! Error types for the API package writer

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for manifest writing
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while writing the manifest
#[derive(Debug, Error)]
pub enum Error {
    /// Destination could not be written (missing directory, permissions, disk full)
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
