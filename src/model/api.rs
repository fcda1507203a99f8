use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Success envelope wrapping every 2xx response body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponseDto<T> {
    pub status: u16,
    pub data: T,
    pub message: String,
}

/// Error envelope returned for every failed request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDto {
    pub status: u16,
    pub error_code: String,
    pub error_message: String,
    pub error_data: ErrorDataDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDataDto {
    /// Diagnostic detail for the failure, usually the underlying error text.
    pub error_meta: String,
}

/// Payload of delete endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}
