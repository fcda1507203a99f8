//! JSON body validation ahead of the controller.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationError};

use crate::server::error::AppError;

/// Custom rule rejecting text that is empty after trimming.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }

    Ok(())
}

/// JSON body extractor that runs [`Validate`] before the handler sees the value.
///
/// Unparseable JSON, a wrong content type, missing fields, mistyped fields and failed
/// validation all reject with 400 `VALIDATION_ERROR`.
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;

        value.validate()?;

        Ok(Self(value))
    }
}

/// Optional JSON body extractor for read endpoints.
///
/// An empty body yields `T::default()`; otherwise the body is parsed as JSON regardless
/// of content type and validated like [`ValidatedJson`].
pub struct JsonOrDefault<T>(pub T);

impl<T, S> FromRequest<S> for JsonOrDefault<T>
where
    T: DeserializeOwned + Default + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;

        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }

        let value: T = serde_json::from_slice(&body)
            .map_err(|e| AppError::Validation(format!("Invalid JSON body: {}", e)))?;
        value.validate()?;

        Ok(Self(value))
    }
}
