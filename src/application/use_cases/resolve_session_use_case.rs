//! Stored session lookup.

use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::AuthTokenRecord;
use crate::domain::errors::AuthError;
use crate::domain::ports::AuthTokenStorePort;

/// Resolves the token stored by an earlier login.
pub struct ResolveSessionUseCase {
    store_port: Arc<dyn AuthTokenStorePort>,
}

impl ResolveSessionUseCase {
    /// Creates new use case.
    #[must_use]
    pub const fn new(store_port: Arc<dyn AuthTokenStorePort>) -> Self {
        Self { store_port }
    }

    /// Returns the record stored for `email`, if any.
    ///
    /// # Errors
    /// Returns error if the store cannot be read.
    pub async fn execute(&self, email: &str) -> Result<Option<AuthTokenRecord>, AuthError> {
        let email = email.trim();
        if email.is_empty() {
            return Ok(None);
        }

        let record = self.store_port.find_by_email(email).await?;
        debug!(email, found = record.is_some(), "Resolved stored session");

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::StorageError;
    use crate::domain::ports::mocks::MockAuthTokenStorePort;

    #[tokio::test]
    async fn test_found_record() {
        let mut store = MockAuthTokenStorePort::new();
        store
            .expect_find_by_email()
            .withf(|email| email == "a@b.com")
            .returning(|email| Ok(Some(AuthTokenRecord::new("abc123", email))));

        let record = ResolveSessionUseCase::new(Arc::new(store))
            .execute(" a@b.com ")
            .await
            .unwrap();

        assert_eq!(record.unwrap().token, "abc123");
    }

    #[tokio::test]
    async fn test_blank_email_skips_store() {
        let mut store = MockAuthTokenStorePort::new();
        store.expect_find_by_email().never();

        let record = ResolveSessionUseCase::new(Arc::new(store))
            .execute("   ")
            .await
            .unwrap();

        assert!(record.is_none());
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let mut store = MockAuthTokenStorePort::new();
        store
            .expect_find_by_email()
            .returning(|_| Err(StorageError::Keyring("locked".to_string())));

        let result = ResolveSessionUseCase::new(Arc::new(store))
            .execute("a@b.com")
            .await;

        assert!(matches!(result, Err(AuthError::Storage(_))));
    }
}
