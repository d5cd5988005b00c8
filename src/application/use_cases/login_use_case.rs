//! Login use case implementation.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::services::{AuthResultNormalizer, unknown_error};
use crate::domain::entities::{AuthLoginRequest, AuthToken, Resource};
use crate::domain::ports::AuthRemotePort;

/// Logs in against the remote server and stores the issued token.
#[derive(Clone)]
pub struct LoginUseCase {
    remote_port: Arc<dyn AuthRemotePort>,
    normalizer: AuthResultNormalizer,
}

impl LoginUseCase {
    /// Creates new login use case.
    #[must_use]
    pub const fn new(remote_port: Arc<dyn AuthRemotePort>, normalizer: AuthResultNormalizer) -> Self {
        Self {
            remote_port,
            normalizer,
        }
    }

    /// Executes login with provided request.
    ///
    /// Never fails: transport and server errors are folded into
    /// [`Resource::Error`].
    pub async fn execute(&self, request: AuthLoginRequest) -> Resource<AuthToken> {
        debug!(email = %request.email, "Attempting login");

        let response = match self.remote_port.login_auth_token(&request).await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Login request failed");
                return unknown_error();
            }
        };

        let result = self.normalizer.normalize_login(response, &request.email).await;

        if result.is_success() {
            info!(email = %request.email, token = %result.data(), "Successfully logged in");
        }

        result
    }
}
