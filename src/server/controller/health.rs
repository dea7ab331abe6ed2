use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::{model::api::ResponseDto, server::error::AppError};

/// Tag for grouping health endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// Liveness probe.
///
/// # Returns
/// - `200 OK` - The service is up
#[utoipa::path(
    get,
    path = "/",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service is up")
    ),
)]
pub async fn liveness() -> Result<impl IntoResponse, AppError> {
    Ok((
        StatusCode::OK,
        Json(ResponseDto::new(
            StatusCode::OK,
            serde_json::json!({ "status": "ok" }),
            "Trailhead API is running",
        )),
    ))
}
