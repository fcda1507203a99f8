use std::{collections::HashMap, sync::Mutex};

use async_trait::async_trait;

use crate::server::{error::storage::StorageError, storage::ObjectStorage};

/// In-memory backend for tests.
///
/// A rejecting instance fails every upload, exercising the image fallback paths.
#[derive(Default)]
pub struct MemoryStorage {
    objects: Mutex<HashMap<String, Vec<u8>>>,
    reject: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rejecting() -> Self {
        Self {
            reject: true,
            ..Self::default()
        }
    }

    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.objects.lock().ok()?.get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.objects.lock().map(|objects| objects.len()).unwrap_or(0)
    }
}

#[async_trait]
impl ObjectStorage for MemoryStorage {
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        _content_type: &str,
    ) -> Result<String, StorageError> {
        if self.reject {
            return Err(StorageError::Rejected(format!("refusing to store {}", key)));
        }

        self.objects
            .lock()
            .map_err(|e| StorageError::Rejected(e.to_string()))?
            .insert(key.to_string(), bytes);

        Ok(format!("memory://objects/{}", key))
    }
}
