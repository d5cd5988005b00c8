//! Local token store error types.

use thiserror::Error;

/// Token store error variants.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Store file could not be read or written.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored data could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// System keyring refused the operation.
    #[error("keyring error: {0}")]
    Keyring(String),

    /// Store declined the record.
    #[error("store rejected write: {0}")]
    Rejected(String),
}
