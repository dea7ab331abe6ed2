use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Uniform success envelope returned by every endpoint.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseDto<T> {
    pub status_code: u16,
    pub data: T,
    pub message: String,
}

impl<T> ResponseDto<T> {
    pub fn new(status_code: axum::http::StatusCode, data: T, message: impl Into<String>) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
            message: message.into(),
        }
    }
}

/// Uniform error envelope; `success` is always false.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl ErrorDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors: None,
        }
    }

    pub fn with_errors(message: impl Into<String>, errors: Vec<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors: Some(errors),
        }
    }
}
