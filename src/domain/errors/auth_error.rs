//! Authentication error types.

use thiserror::Error;

/// Authentication error variants.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum AuthError {
    #[error("network error during authentication: {message}")]
    NetworkError { message: String },

    #[error("unreadable error body: {reason}")]
    InvalidErrorBody { reason: String },

    #[error("local token store error: {0}")]
    Storage(#[from] super::StorageError),

    #[error("unexpected authentication error: {message}")]
    Unexpected { message: String },
}

impl AuthError {
    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::NetworkError {
            message: message.into(),
        }
    }

    /// Creates invalid error body error.
    #[must_use]
    pub fn invalid_error_body(reason: impl Into<String>) -> Self {
        Self::InvalidErrorBody {
            reason: reason.into(),
        }
    }

    /// Creates unexpected error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Returns whether error is network related.
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        matches!(self, Self::NetworkError { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::StorageError;

    #[test]
    fn test_storage_error_converts() {
        let err: AuthError = StorageError::Rejected("disk full".to_string()).into();

        assert!(matches!(err, AuthError::Storage(_)));
        assert!(!err.is_network_error());
        assert_eq!(
            err.to_string(),
            "local token store error: store rejected write: disk full"
        );
    }

    #[test]
    fn test_network_error_classification() {
        assert!(AuthError::network("timed out").is_network_error());
        assert!(!AuthError::unexpected("nope").is_network_error());
    }
}
