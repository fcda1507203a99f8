//! Object storage for proof images.
//!
//! Images arrive as data URLs. [`upload_data_url`] decodes one, derives the object key
//! from a logical name plus an extension matching the content type, and hands the bytes
//! to an [`ObjectStorage`] backend, which returns the public URL to persist.

pub mod data_url;
pub mod filesystem;
#[cfg(test)]
pub mod memory;

use async_trait::async_trait;

use crate::server::{error::storage::StorageError, storage::data_url::DataUrl};

/// Backend that stores objects publicly and reports where they can be fetched.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Stores `bytes` under `key`, replacing any existing object.
    ///
    /// # Returns
    /// - `Ok(String)` - Public URL of the stored object
    /// - `Err(StorageError)` - The backend could not store the object
    async fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str)
        -> Result<String, StorageError>;
}

/// Decodes a data URL and uploads it under `name` plus the matching extension.
///
/// # Arguments
/// - `storage` - Backend to upload to
/// - `data_url` - `data:<mime>;base64,<payload>` or a bare base64 payload
/// - `name` - Logical object name, e.g. `trip_SL-1-product-bill-image`
///
/// # Returns
/// - `Ok(String)` - Public URL of the uploaded object
/// - `Err(StorageError)` - Payload could not be decoded or stored
pub async fn upload_data_url(
    storage: &dyn ObjectStorage,
    data_url: &str,
    name: &str,
) -> Result<String, StorageError> {
    let image = DataUrl::parse(data_url)?;
    let key = object_key(name, &image.content_type);

    storage.put(&key, image.bytes, &image.content_type).await
}

/// File extension for an image content type, empty when unknown.
pub fn extension_for(content_type: &str) -> &'static str {
    match content_type {
        "image/jpeg" => ".jpg",
        "image/png" => ".png",
        "image/gif" => ".gif",
        _ => "",
    }
}

/// Builds an object key from a logical name and content type.
///
/// Characters outside `[A-Za-z0-9._-]` are replaced with `_` so caller-supplied parts
/// such as a trip's slno cannot introduce path separators.
pub fn object_key(name: &str, content_type: &str) -> String {
    let safe: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();

    format!("{}{}", safe.trim_start_matches('.'), extension_for(content_type))
}
