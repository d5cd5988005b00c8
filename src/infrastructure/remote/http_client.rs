//! Authentication server HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::entities::{AuthLoginRequest, AuthRegistrationRequest};
use crate::domain::errors::AuthError;
use crate::domain::ports::{AuthRemotePort, AuthTokenDto, RawResponse};
use crate::infrastructure::config::ApiConfig;

const USER_AGENT: &str = concat!("session-manager/", env!("CARGO_PKG_VERSION"));

/// Remote port backed by a JSON HTTP API.
pub struct HttpAuthRemote {
    client: Client,
    login_url: String,
    register_url: String,
}

impl HttpAuthRemote {
    /// Creates client from API configuration.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(config: &ApiConfig) -> Result<Self, AuthError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AuthError::unexpected(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            login_url: join_url(&config.base_url, &config.login_path),
            register_url: join_url(&config.base_url, &config.register_path),
        })
    }

    /// Creates client with default paths against `base_url`.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, AuthError> {
        Self::new(&ApiConfig {
            base_url: base_url.into(),
            ..ApiConfig::default()
        })
    }

    async fn post<B: Serialize + Sync>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<RawResponse<AuthTokenDto>, AuthError> {
        debug!(%url, "Posting to auth server");

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, %url, "Failed to reach auth server");
                if e.is_timeout() {
                    AuthError::network("request timed out")
                } else if e.is_connect() {
                    AuthError::network("failed to connect to auth server")
                } else {
                    AuthError::network(e.to_string())
                }
            })?;

        into_raw_response(response).await
    }
}

async fn into_raw_response(response: Response) -> Result<RawResponse<AuthTokenDto>, AuthError> {
    let status = response.status();
    let bytes = response
        .bytes()
        .await
        .map_err(|e| AuthError::network(format!("failed to read response body: {e}")))?;

    debug!(%status, len = bytes.len(), "Auth server responded");

    if !status.is_success() {
        let error_body = (!bytes.is_empty()).then(|| bytes.to_vec());
        return Ok(RawResponse::failed(status.as_u16(), error_body));
    }

    let body = if status == StatusCode::NO_CONTENT || bytes.is_empty() {
        None
    } else {
        match serde_json::from_slice::<AuthTokenDto>(&bytes) {
            Ok(dto) => Some(dto),
            Err(e) => {
                warn!(error = %e, "Failed to parse token response");
                None
            }
        }
    };

    Ok(RawResponse::ok(status.as_u16(), body))
}

fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[async_trait]
impl AuthRemotePort for HttpAuthRemote {
    async fn login_auth_token(
        &self,
        request: &AuthLoginRequest,
    ) -> Result<RawResponse<AuthTokenDto>, AuthError> {
        self.post(&self.login_url, request).await
    }

    async fn register_auth_token(
        &self,
        request: &AuthRegistrationRequest,
    ) -> Result<RawResponse<AuthTokenDto>, AuthError> {
        self.post(&self.register_url, request).await
    }
}
