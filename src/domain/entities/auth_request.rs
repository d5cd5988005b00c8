//! Request payloads sent to the authentication server.

use std::fmt;

use serde::Serialize;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Login credentials.
#[derive(Clone, Serialize, Zeroize, ZeroizeOnDrop)]
pub struct AuthLoginRequest {
    /// Account email; also the key the token is stored under.
    pub email: String,
    /// Account password.
    pub password: String,
}

impl AuthLoginRequest {
    /// Creates new login request.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for AuthLoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthLoginRequest")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Registration form.
#[derive(Clone, Serialize, Zeroize, ZeroizeOnDrop)]
pub struct AuthRegistrationRequest {
    /// Account email.
    pub email: String,
    /// Chosen password.
    pub password: String,
    /// Password confirmation, checked by the server.
    pub password2: String,
    /// Public username.
    pub username: String,
}

impl AuthRegistrationRequest {
    /// Creates new registration request.
    #[must_use]
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        password2: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            password2: password2.into(),
            username: username.into(),
        }
    }
}

impl fmt::Debug for AuthRegistrationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthRegistrationRequest")
            .field("email", &self.email)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}
