//! Local token store port definition.

use async_trait::async_trait;

use crate::domain::entities::AuthTokenRecord;
use crate::domain::errors::StorageError;

/// Port for local persistence of login tokens.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthTokenStorePort: Send + Sync {
    /// Inserts a record, replacing any record for the same email.
    ///
    /// Returns the row id. A negative id signals a failed write for stores
    /// that report failure through a sentinel instead of an error.
    async fn insert(&self, record: &AuthTokenRecord) -> Result<i64, StorageError>;

    /// Looks up the record stored for an email.
    async fn find_by_email(&self, email: &str) -> Result<Option<AuthTokenRecord>, StorageError>;
}
