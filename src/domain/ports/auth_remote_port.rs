//! Remote authentication port definition.

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::entities::{AuthLoginRequest, AuthRegistrationRequest};
use crate::domain::errors::AuthError;

/// Token payload returned by the server on success.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthTokenDto {
    /// Issued token.
    pub token: String,
}

/// HTTP-style response as seen by the repository.
///
/// `body` is only populated for successful responses that decoded cleanly;
/// `error_body` holds the raw bytes of an unsuccessful response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse<T> {
    /// Transport-level success flag (2xx).
    pub is_successful: bool,
    /// HTTP status code.
    pub code: u16,
    /// Decoded success body.
    pub body: Option<T>,
    /// Raw error body.
    pub error_body: Option<Vec<u8>>,
}

impl<T> RawResponse<T> {
    /// Creates successful response with a decoded body.
    #[must_use]
    pub const fn ok(code: u16, body: Option<T>) -> Self {
        Self {
            is_successful: true,
            code,
            body,
            error_body: None,
        }
    }

    /// Creates unsuccessful response with an optional raw body.
    #[must_use]
    pub const fn failed(code: u16, error_body: Option<Vec<u8>>) -> Self {
        Self {
            is_successful: false,
            code,
            body: None,
            error_body,
        }
    }

    /// Returns whether the response counts as a success for normalization.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.is_successful && self.code == 200
    }
}

/// Port for the remote login/registration endpoints.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthRemotePort: Send + Sync {
    /// Posts login credentials.
    ///
    /// `Err` means no HTTP response was received at all.
    async fn login_auth_token(
        &self,
        request: &AuthLoginRequest,
    ) -> Result<RawResponse<AuthTokenDto>, AuthError>;

    /// Posts registration form.
    async fn register_auth_token(
        &self,
        request: &AuthRegistrationRequest,
    ) -> Result<RawResponse<AuthTokenDto>, AuthError>;
}
