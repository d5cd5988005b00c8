//! Normalizes raw login/registration responses into [`Resource`] values.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, error, warn};

use crate::application::dto::AuthTokenDtoMapper;
use crate::domain::entities::{AuthToken, AuthTokenRecord, Resource, ResponseType, StateResponse};
use crate::domain::errors::AuthError;
use crate::domain::ports::{AuthTokenDto, AuthTokenStorePort, RawResponse};

/// Message used whenever the real cause cannot be shown.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

/// Maps server responses into the envelope consumed by the UI.
#[derive(Clone)]
pub struct AuthResultNormalizer {
    store: Arc<dyn AuthTokenStorePort>,
    mapper: AuthTokenDtoMapper,
}

impl AuthResultNormalizer {
    /// Creates new normalizer.
    #[must_use]
    pub fn new(store: Arc<dyn AuthTokenStorePort>, mapper: AuthTokenDtoMapper) -> Self {
        Self { store, mapper }
    }

    /// Normalizes a login response.
    ///
    /// On success the token is stored under `email`. A failed write is
    /// logged and does not change the result.
    pub async fn normalize_login(
        &self,
        response: RawResponse<AuthTokenDto>,
        email: &str,
    ) -> Resource<AuthToken> {
        if !response.is_ok() {
            return normalize_failure(response);
        }

        let Some(dto) = response.body.filter(has_token) else {
            warn!(code = response.code, "Login response has no token");
            return unknown_error();
        };

        self.save_auth_token(&dto, email).await;

        Resource::success(self.mapper.map_to_domain_model(&dto))
    }

    /// Normalizes a registration response. Never touches the store.
    #[must_use]
    pub fn normalize_register(&self, response: RawResponse<AuthTokenDto>) -> Resource<AuthToken> {
        if !response.is_ok() {
            return normalize_failure(response);
        }

        match response.body.filter(has_token) {
            Some(dto) => Resource::success(self.mapper.map_to_domain_model(&dto)),
            None => {
                warn!(code = response.code, "Registration response has no token");
                unknown_error()
            }
        }
    }

    async fn save_auth_token(&self, dto: &AuthTokenDto, email: &str) {
        let record = AuthTokenRecord::new(dto.token.clone(), email);

        match self.store.insert(&record).await {
            Ok(row_id) if row_id >= 0 => {
                debug!(row_id, email, "Auth token saved to local store");
            }
            Ok(row_id) => {
                error!(row_id, email, "Couldn't save auth token into local store");
            }
            Err(e) => {
                error!(error = %e, email, "Couldn't save auth token into local store");
            }
        }
    }
}

// A blank token would leave the resulting Resource with neither a token nor an error.
fn has_token(dto: &AuthTokenDto) -> bool {
    !dto.token.trim().is_empty()
}

fn normalize_failure(response: RawResponse<AuthTokenDto>) -> Resource<AuthToken> {
    let Some(error_body) = response.error_body else {
        debug!(code = response.code, "Unsuccessful response without error body");
        return unknown_error();
    };

    match parse_error_message(&error_body) {
        Ok(message) => {
            debug!(code = response.code, %message, "Server rejected request");
            server_error(message)
        }
        Err(e) => {
            warn!(code = response.code, error = %e, "Failed to read error body");
            unknown_error()
        }
    }
}

/// Extracts the `error` string field from a JSON error body.
///
/// # Errors
/// Returns error if the body is not a JSON object with a string `error`.
pub fn parse_error_message(body: &[u8]) -> Result<String, AuthError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| AuthError::invalid_error_body(format!("not valid JSON: {e}")))?;

    value
        .get("error")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| AuthError::invalid_error_body("missing string field `error`"))
}

fn server_error(message: String) -> Resource<AuthToken> {
    let state = StateResponse::new(message.clone(), ResponseType::Dialog);
    Resource::error(message, AuthToken::from_error(state))
}

/// Generic failure shown as a toast.
#[must_use]
pub fn unknown_error() -> Resource<AuthToken> {
    Resource::error(
        UNKNOWN_ERROR_MESSAGE,
        AuthToken::from_error(StateResponse::new(
            UNKNOWN_ERROR_MESSAGE,
            ResponseType::Toast,
        )),
    )
}
