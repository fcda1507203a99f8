use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use url::Url;

use crate::server::{error::storage::StorageError, storage::ObjectStorage};

/// Stores objects as files under a directory served publicly at `public_base`.
///
/// Writes go to a temporary file first and are renamed into place, so readers never see
/// a partially written image.
pub struct FilesystemStorage {
    root: PathBuf,
    public_base: Url,
}

impl FilesystemStorage {
    /// Creates a backend rooted at `root`.
    ///
    /// # Arguments
    /// - `root` - Directory objects are written to
    /// - `public_base` - URL the directory is served under; should end with `/`
    pub fn new(root: impl Into<PathBuf>, public_base: Url) -> Self {
        Self {
            root: root.into(),
            public_base,
        }
    }

    /// Creates the root directory if it does not exist.
    pub async fn ensure_root(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)
            .await
            .map_err(|source| StorageError::Write {
                key: self.root.display().to_string(),
                source,
            })
    }
}

#[async_trait]
impl ObjectStorage for FilesystemStorage {
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StorageError> {
        if key.is_empty() {
            return Err(StorageError::Rejected("empty object key".to_string()));
        }

        let path = self.root.join(key);
        let temp_path = self.root.join(format!(".{}.tmp", key));
        let write_err = |source| StorageError::Write {
            key: key.to_string(),
            source,
        };

        tracing::debug!(key, content_type, size = bytes.len(), "storing object");

        self.ensure_root().await?;
        fs::write(&temp_path, &bytes).await.map_err(write_err)?;
        fs::rename(&temp_path, &path).await.map_err(write_err)?;

        self.public_base
            .join(key)
            .map(String::from)
            .map_err(|source| StorageError::PublicUrl {
                key: key.to_string(),
                source,
            })
    }
}
