use base64::{engine::general_purpose::STANDARD, Engine};

use crate::server::error::storage::StorageError;

/// Content type assumed when neither the data URL nor the bytes reveal one.
pub const FALLBACK_CONTENT_TYPE: &str = "image/jpeg";

/// A decoded data URL.
#[derive(Debug, Clone, PartialEq)]
pub struct DataUrl {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl DataUrl {
    /// Parses `data:<mime>;base64,<payload>`.
    ///
    /// Input without a comma is treated as a bare base64 payload. When no content type is
    /// declared it is sniffed from the decoded bytes, falling back to
    /// [`FALLBACK_CONTENT_TYPE`].
    ///
    /// # Returns
    /// - `Ok(DataUrl)` - Decoded payload and its content type
    /// - `Err(StorageError::Decode)` - Payload is not valid base64
    pub fn parse(input: &str) -> Result<Self, StorageError> {
        let (declared, payload) = match input.split_once(',') {
            Some((header, payload)) => (declared_type(header), payload),
            None => (None, input),
        };

        let bytes = STANDARD.decode(payload.trim())?;
        let content_type = match declared {
            Some(content_type) => content_type,
            None => infer::get(&bytes)
                .map(|kind| kind.mime_type())
                .unwrap_or(FALLBACK_CONTENT_TYPE)
                .to_string(),
        };

        Ok(Self {
            content_type,
            bytes,
        })
    }
}

fn declared_type(header: &str) -> Option<String> {
    header
        .strip_prefix("data:")
        .and_then(|rest| rest.split(';').next())
        .map(str::trim)
        .filter(|content_type| !content_type.is_empty())
        .map(str::to_string)
}

/// Whether `value` is a `data:` URL with a well-formed base64 payload.
///
/// Used to tell freshly uploaded images apart from already-stored URLs on update.
pub fn is_base64_data_url(value: &str) -> bool {
    if !value.starts_with("data:") {
        return false;
    }

    let Some((_, payload)) = value.split_once(',') else {
        return false;
    };

    !payload.is_empty()
        && payload.len() % 4 == 0
        && payload
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'/' | b'='))
}
