//! HTTP request handlers.
//!
//! Controllers extract the caller and the validated body, convert DTOs into service
//! parameters, and wrap results in the success envelope. Failures are tagged with the
//! [`Operation`](crate::server::error::Operation) being performed so internal errors
//! render with an operation-specific code.

pub mod catalog;
pub mod health;
pub mod trip;

#[cfg(test)]
mod test;

use axum::{http::StatusCode, Json};
use serde::Serialize;

use crate::model::api::ApiResponseDto;

/// Wraps a payload in the success envelope.
pub fn ok<T: Serialize>(data: T) -> Json<ApiResponseDto<T>> {
    Json(ApiResponseDto {
        status: StatusCode::OK.as_u16(),
        data,
        message: String::new(),
    })
}
