use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, ResponseDto},
        payment::WebhookDto,
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::payment::PaymentService,
        state::AppState,
    },
};

/// Tag for grouping payment endpoints in OpenAPI documentation
pub static PAYMENT_TAG: &str = "payment";

/// List webhooks registered at the payment provider.
///
/// Best-effort: without a configured provider key, or on provider failure,
/// the list is empty rather than an error.
///
/// # Access Control
/// - Authenticated user
///
/// # Returns
/// - `200 OK` - Registered webhooks (possibly empty) in the success envelope
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    get,
    path = "/api/payments/webhooks",
    tag = PAYMENT_TAG,
    responses(
        (status = 200, description = "Registered webhooks", body = [WebhookDto]),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn list_webhooks(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require().await?;

    let webhooks = PaymentService::new(&state.http_client, state.revolut_api_key.as_deref())
        .list_webhooks()
        .await;

    Ok((
        StatusCode::OK,
        Json(ResponseDto::new(StatusCode::OK, webhooks, "Webhooks fetched")),
    ))
}
