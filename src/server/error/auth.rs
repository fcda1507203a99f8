use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::error_response;
use axum::http::StatusCode;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization` header on a route that requires a caller.
    #[error("Access token missing")]
    MissingToken,

    /// The `Authorization` header has no token after the scheme.
    #[error("Malformed token")]
    MalformedToken,

    /// The token failed decoding, signature verification or its expiry check.
    ///
    /// The reason is only logged; clients always see "Invalid token".
    #[error("Invalid token: {0}")]
    InvalidToken(String),
}

/// Converts authentication errors into HTTP responses.
///
/// # Returns
/// - 401 Unauthorized - For a missing or malformed bearer token
/// - 403 Forbidden - For a token that fails verification
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken => error_response(
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Access token missing",
                "Access token missing".to_string(),
            ),
            Self::MalformedToken => error_response(
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Malformed token",
                "Malformed token".to_string(),
            ),
            Self::InvalidToken(reason) => {
                tracing::debug!("Rejected bearer token: {}", reason);

                error_response(
                    StatusCode::FORBIDDEN,
                    "FORBIDDEN",
                    "Invalid token",
                    "Invalid token".to_string(),
                )
            }
        }
    }
}
