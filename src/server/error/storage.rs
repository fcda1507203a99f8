use thiserror::Error;

/// Failures while turning a data URL into a stored object.
///
/// These never reach clients directly: image uploads degrade to the previous URL and the
/// error is only logged.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The data URL payload is not valid base64.
    #[error("Failed to decode image payload: {0}")]
    Decode(#[from] base64::DecodeError),

    /// The backend could not persist the object.
    #[error("Failed to write object '{key}': {source}")]
    Write {
        /// Object key being written
        key: String,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The object key could not be turned into a public URL.
    #[error("Failed to build public URL for '{key}': {source}")]
    PublicUrl {
        /// Object key being published
        key: String,
        /// URL join failure
        #[source]
        source: url::ParseError,
    },

    /// Backend refused the upload.
    #[error("Upload rejected: {0}")]
    Rejected(String),
}
