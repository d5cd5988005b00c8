//! Authentication token domain model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How the UI should present an error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseType {
    /// Blocking dialog, used for messages coming from the server.
    Dialog,
    /// Transient toast, used for generic failures.
    Toast,
}

impl fmt::Display for ResponseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dialog => write!(f, "dialog"),
            Self::Toast => write!(f, "toast"),
        }
    }
}

/// Error presentation hint attached to a failed [`AuthToken`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateResponse {
    /// Message shown to the user.
    pub message: String,
    /// UI treatment for the message.
    pub error_response_type: ResponseType,
}

impl StateResponse {
    /// Creates new state response.
    #[must_use]
    pub fn new(message: impl Into<String>, error_response_type: ResponseType) -> Self {
        Self {
            message: message.into(),
            error_response_type,
        }
    }
}

/// Either a valid credential or an error carrier.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthToken {
    token: String,
    error_response: Option<StateResponse>,
}

impl AuthToken {
    /// Creates token carrying a credential.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            error_response: None,
        }
    }

    /// Creates token carrying only an error.
    #[must_use]
    pub const fn from_error(error_response: StateResponse) -> Self {
        Self {
            token: String::new(),
            error_response: Some(error_response),
        }
    }

    /// Returns token as string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.token
    }

    /// Returns the attached error, if any.
    #[must_use]
    pub const fn error_response(&self) -> Option<&StateResponse> {
        self.error_response.as_ref()
    }

    /// Returns whether this token carries a credential.
    #[must_use]
    pub fn has_token(&self) -> bool {
        !self.token.is_empty()
    }

    /// Returns masked token for display.
    #[must_use]
    pub fn masked(&self) -> String {
        let chars: Vec<char> = self.token.chars().collect();
        if chars.len() <= 10 {
            return "*".repeat(chars.len());
        }

        let visible_prefix: String = chars[..4].iter().collect();
        let visible_suffix: String = chars[chars.len() - 4..].iter().collect();
        format!("{visible_prefix}...{visible_suffix}")
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthToken")
            .field("token", &self.masked())
            .field("error_response", &self.error_response)
            .finish()
    }
}

impl fmt::Display for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error_response {
            Some(error) => write!(f, "{} ({})", error.message, error.error_response_type),
            None => write!(f, "{}", self.masked()),
        }
    }
}
