//! JSON file token store.

use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::domain::entities::AuthTokenRecord;
use crate::domain::errors::StorageError;
use crate::domain::ports::AuthTokenStorePort;

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    next_id: i64,
    #[serde(default)]
    records: Vec<StoredRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredRecord {
    id: i64,
    #[serde(flatten)]
    record: AuthTokenRecord,
}

/// Token store persisted as a single JSON document.
///
/// Writes go through a temp file in the same directory and are renamed into
/// place, so a crash never leaves a half-written file behind.
pub struct FileAuthTokenStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileAuthTokenStore {
    /// Creates store backed by `path`. The file is created on first insert.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    async fn load(&self) -> Result<StoreFile, StorageError> {
        match tokio::fs::read(&self.path).await {
            Ok(content) => Ok(serde_json::from_slice(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(StoreFile::default()),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, file: &StoreFile) -> Result<(), StorageError> {
        let content = serde_json::to_vec_pretty(file)?;
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || write_atomic(&path, &content))
            .await
            .map_err(|e| StorageError::Rejected(format!("write task failed: {e}")))?
    }
}

fn write_atomic(path: &Path, content: &[u8]) -> Result<(), StorageError> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(parent)?;

    let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
    temp_file.write_all(content)?;
    temp_file.persist(path).map_err(|e| e.error)?;

    Ok(())
}

#[async_trait]
impl AuthTokenStorePort for FileAuthTokenStore {
    async fn insert(&self, record: &AuthTokenRecord) -> Result<i64, StorageError> {
        let _guard = self.lock.lock().await;

        let mut file = self.load().await?;
        let before = file.records.len();
        file.records.retain(|stored| stored.record.email != record.email);
        if file.records.len() != before {
            debug!(email = %record.email, "Replacing stored token");
        }

        file.next_id = file.next_id.max(0) + 1;
        let id = file.next_id;
        file.records.push(StoredRecord {
            id,
            record: record.clone(),
        });

        self.save(&file).await.inspect_err(|e| {
            warn!(error = %e, path = %self.path.display(), "Failed to write token store");
        })?;

        debug!(row_id = id, path = %self.path.display(), "Token record written");
        Ok(id)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<AuthTokenRecord>, StorageError> {
        let _guard = self.lock.lock().await;

        let file = self.load().await?;
        Ok(file
            .records
            .into_iter()
            .find(|stored| stored.record.email == email)
            .map(|stored| stored.record))
    }
}
