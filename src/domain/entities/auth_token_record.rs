//! Locally persisted login record.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Token stored after a successful login.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthTokenRecord {
    /// Token returned by the server.
    pub token: String,
    /// Email the login was performed with.
    pub email: String,
    /// Time the record was created.
    pub created_at: DateTime<Utc>,
}

impl AuthTokenRecord {
    /// Creates record stamped with the current time.
    ///
    /// The email is trimmed so it matches the key used by session lookups.
    #[must_use]
    pub fn new(token: impl Into<String>, email: &str) -> Self {
        Self {
            token: token.into(),
            email: email.trim().to_owned(),
            created_at: Utc::now(),
        }
    }
}

impl fmt::Debug for AuthTokenRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthTokenRecord")
            .field("token", &"<redacted>")
            .field("email", &self.email)
            .field("created_at", &self.created_at)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_is_trimmed() {
        let record = AuthTokenRecord::new("abc123", "  a@b.com\n");

        assert_eq!(record.email, "a@b.com");
        assert_eq!(record.token, "abc123");
    }

    #[test]
    fn test_debug_redacts_token() {
        let record = AuthTokenRecord::new("abc123", "a@b.com");

        assert!(!format!("{record:?}").contains("abc123"));
    }
}
