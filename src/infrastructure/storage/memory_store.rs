//! In-process token store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::AuthTokenRecord;
use crate::domain::errors::StorageError;
use crate::domain::ports::AuthTokenStorePort;

#[derive(Default)]
struct Rows {
    next_id: i64,
    by_email: HashMap<String, (i64, AuthTokenRecord)>,
}

/// Token store that lives only as long as the process.
#[derive(Default)]
pub struct InMemoryAuthTokenStore {
    rows: RwLock<Rows>,
}

impl InMemoryAuthTokenStore {
    /// Creates empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns number of stored records.
    pub async fn len(&self) -> usize {
        self.rows.read().await.by_email.len()
    }

    /// Returns whether the store is empty.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl AuthTokenStorePort for InMemoryAuthTokenStore {
    async fn insert(&self, record: &AuthTokenRecord) -> Result<i64, StorageError> {
        let mut rows = self.rows.write().await;
        rows.next_id += 1;
        let id = rows.next_id;
        rows.by_email
            .insert(record.email.clone(), (id, record.clone()));
        Ok(id)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<AuthTokenRecord>, StorageError> {
        Ok(self
            .rows
            .read()
            .await
            .by_email
            .get(email)
            .map(|(_, record)| record.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_replaces_and_counts() {
        let store = InMemoryAuthTokenStore::new();
        assert!(store.is_empty().await);

        store
            .insert(&AuthTokenRecord::new("one", "a@b.com"))
            .await
            .unwrap();
        let id = store
            .insert(&AuthTokenRecord::new("two", "a@b.com"))
            .await
            .unwrap();

        assert_eq!(id, 2);
        assert_eq!(store.len().await, 1);
        let found = store.find_by_email("a@b.com").await.unwrap().unwrap();
        assert_eq!(found.token, "two");
    }
}
