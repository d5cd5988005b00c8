//! Success/error envelope handed to the UI layer.

/// Result of a repository operation.
///
/// Unlike [`Result`], both variants carry a `T`: on error the payload holds
/// whatever the UI needs to render the failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource<T> {
    /// Operation succeeded.
    Success {
        /// Resulting data.
        data: T,
    },
    /// Operation failed.
    Error {
        /// Human-readable failure message.
        message: String,
        /// Error payload.
        data: T,
    },
}

impl<T> Resource<T> {
    /// Creates success resource.
    #[must_use]
    pub const fn success(data: T) -> Self {
        Self::Success { data }
    }

    /// Creates error resource.
    #[must_use]
    pub fn error(message: impl Into<String>, data: T) -> Self {
        Self::Error {
            message: message.into(),
            data,
        }
    }

    /// Returns whether this is a success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns the payload.
    #[must_use]
    pub const fn data(&self) -> &T {
        match self {
            Self::Success { data } | Self::Error { data, .. } => data,
        }
    }

    /// Returns the error message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Error { message, .. } => Some(message),
        }
    }

    /// Consumes the resource and returns the payload.
    #[must_use]
    pub fn into_data(self) -> T {
        match self {
            Self::Success { data } | Self::Error { data, .. } => data,
        }
    }
}
