//! Registration use case implementation.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::services::{AuthResultNormalizer, unknown_error};
use crate::domain::entities::{AuthRegistrationRequest, AuthToken, Resource};
use crate::domain::ports::AuthRemotePort;

/// Registers a new account. The issued token is returned but not stored.
#[derive(Clone)]
pub struct RegisterUseCase {
    remote_port: Arc<dyn AuthRemotePort>,
    normalizer: AuthResultNormalizer,
}

impl RegisterUseCase {
    /// Creates new registration use case.
    #[must_use]
    pub const fn new(remote_port: Arc<dyn AuthRemotePort>, normalizer: AuthResultNormalizer) -> Self {
        Self {
            remote_port,
            normalizer,
        }
    }

    /// Executes registration with provided request.
    pub async fn execute(&self, request: AuthRegistrationRequest) -> Resource<AuthToken> {
        debug!(email = %request.email, username = %request.username, "Attempting registration");

        match self.remote_port.register_auth_token(&request).await {
            Ok(response) => {
                let result = self.normalizer.normalize_register(response);
                if result.is_success() {
                    info!(email = %request.email, "Account registered");
                }
                result
            }
            Err(e) => {
                warn!(error = %e, "Registration request failed");
                unknown_error()
            }
        }
    }
}
