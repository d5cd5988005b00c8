//! Keyring-based token store.

use async_trait::async_trait;
use keyring::Entry;
use tracing::{debug, warn};

use crate::domain::entities::AuthTokenRecord;
use crate::domain::errors::StorageError;
use crate::domain::ports::AuthTokenStorePort;

const KEYRING_SERVICE: &str = "session-manager";

/// System keyring token store; one credential per email.
pub struct KeyringAuthTokenStore {
    service: String,
}

impl KeyringAuthTokenStore {
    /// Creates new store with default service name.
    #[must_use]
    pub fn new() -> Self {
        Self::with_service(KEYRING_SERVICE)
    }

    /// Creates store with custom service name.
    #[must_use]
    pub fn with_service(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    fn entry(&self, email: &str) -> Result<Entry, StorageError> {
        Entry::new(&self.service, email)
            .map_err(|e| StorageError::Keyring(format!("failed to access keyring: {e}")))
    }
}

impl Default for KeyringAuthTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthTokenStorePort for KeyringAuthTokenStore {
    async fn insert(&self, record: &AuthTokenRecord) -> Result<i64, StorageError> {
        debug!(service = %self.service, email = %record.email, "Storing token in keyring");

        let secret = serde_json::to_string(record)?;
        self.entry(&record.email)?
            .set_password(&secret)
            .map_err(|e| {
                warn!(error = %e, "Failed to store token in keyring");
                StorageError::Keyring(e.to_string())
            })?;

        // Keyring entries have no row id.
        Ok(0)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<AuthTokenRecord>, StorageError> {
        debug!(service = %self.service, email, "Retrieving token from keyring");

        match self.entry(email)?.get_password() {
            Ok(secret) => Ok(Some(serde_json::from_str(&secret)?)),
            Err(keyring::Error::NoEntry) => {
                debug!("No token stored in keyring");
                Ok(None)
            }
            Err(e) => {
                warn!(error = %e, "Failed to retrieve token from keyring");
                Err(StorageError::Keyring(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires system keyring"]
    async fn test_store_and_retrieve_token() {
        let store = KeyringAuthTokenStore::with_service("session-manager-test");
        let record = AuthTokenRecord::new("abc123", "keyring-test@example.com");

        store.insert(&record).await.unwrap();

        let found = store
            .find_by_email("keyring-test@example.com")
            .await
            .unwrap();
        assert_eq!(found, Some(record));
    }
}
