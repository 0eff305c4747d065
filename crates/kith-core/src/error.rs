//! Error types for kith-core

use thiserror::Error;

/// Result type alias using kith-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in kith-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Contact access was refused by the contact source
    #[error("Contact access was denied")]
    PermissionDenied,

    /// Every candidate has been excluded (or the address book is empty)
    #[error("No contacts left to choose from")]
    NoCandidatesAvailable,

    /// Key-value store read or write failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// libSQL error
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Whether this error came from the persistence layer and may succeed on retry.
    pub const fn is_storage_failure(&self) -> bool {
        matches!(self, Self::Storage(_) | Self::LibSql(_) | Self::Io(_))
    }
}
