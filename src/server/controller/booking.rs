use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, ResponseDto},
        booking::{BookingDto, CreateBookingDto, PaymentResultDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::booking::{
            parse_payment_mode, CreateBookingLineParam, CreateBookingParam, SettlePaymentParam,
        },
        service::booking::BookingService,
        state::AppState,
    },
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "booking";

/// Create a booking at checkout.
///
/// Creates a pending booking for the authenticated user with its line items.
/// The payment collaborator settles it later via the payment endpoint.
///
/// # Access Control
/// - Authenticated user
///
/// # Returns
/// - `201 Created` - Pending booking in the success envelope
/// - `400 Bad Request` - Empty cart, bad quantity/amount/date range, or
///   unknown payment mode
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Booking created", body = BookingDto),
        (status = 400, description = "Invalid booking request", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let payment_mode = parse_payment_mode(&payload.payment_mode).ok_or_else(|| {
        AppError::validation("Invalid booking request", "paymentMode must be 'card' or 'cash'")
    })?;

    let param = CreateBookingParam {
        user_id: user.id,
        amount: payload.amount,
        payment_mode,
        lines: payload
            .items
            .into_iter()
            .map(|line| CreateBookingLineParam {
                item_id: line.item_id,
                quantity: line.quantity,
                start_date: line.start_date,
                end_date: line.end_date,
            })
            .collect(),
    };

    let booking = BookingService::new(&state.db).checkout(param).await?;

    Ok((
        StatusCode::CREATED,
        Json(ResponseDto::new(
            StatusCode::CREATED,
            booking.into_dto(),
            "Booking created",
        )),
    ))
}

/// List the caller's bookings.
///
/// # Access Control
/// - Authenticated user
///
/// # Returns
/// - `200 OK` - Bookings (newest first) in the success envelope
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    get,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    responses(
        (status = 200, description = "The caller's bookings", body = [BookingDto]),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn list_bookings(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let bookings = BookingService::new(&state.db).list_for_user(user.id).await?;
    let dtos: Vec<BookingDto> = bookings.into_iter().map(|b| b.into_dto()).collect();

    Ok((
        StatusCode::OK,
        Json(ResponseDto::new(StatusCode::OK, dtos, "Bookings fetched")),
    ))
}

/// Fetch one of the caller's bookings.
///
/// # Access Control
/// - Authenticated user; foreign bookings read as not found
///
/// # Returns
/// - `200 OK` - Booking in the success envelope
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Unknown or foreign booking id
#[utoipa::path(
    get,
    path = "/api/bookings/{booking_id}",
    tag = BOOKING_TAG,
    params(
        ("booking_id" = i32, Path, description = "Booking id")
    ),
    responses(
        (status = 200, description = "The booking", body = BookingDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto)
    ),
)]
pub async fn get_booking(
    State(state): State<AppState>,
    session: Session,
    Path(booking_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let booking = BookingService::new(&state.db)
        .get_for_user(booking_id, user.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ResponseDto::new(
            StatusCode::OK,
            booking.into_dto(),
            "Booking fetched",
        )),
    ))
}

/// Apply a payment outcome to a pending booking.
///
/// Success confirms the booking and marks its lines purchased; failure
/// cancels it. Either way the transition is final.
///
/// # Access Control
/// - Authenticated user; foreign bookings read as not found
///
/// # Returns
/// - `200 OK` - Settled booking in the success envelope
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Unknown or foreign booking id
/// - `409 Conflict` - Booking already settled
#[utoipa::path(
    post,
    path = "/api/bookings/{booking_id}/payment",
    tag = BOOKING_TAG,
    params(
        ("booking_id" = i32, Path, description = "Booking id")
    ),
    request_body = PaymentResultDto,
    responses(
        (status = 200, description = "Booking settled", body = BookingDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 409, description = "Booking already settled", body = ErrorDto)
    ),
)]
pub async fn settle_payment(
    State(state): State<AppState>,
    session: Session,
    Path(booking_id): Path<i32>,
    Json(payload): Json<PaymentResultDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let booking = BookingService::new(&state.db)
        .settle_payment(SettlePaymentParam {
            booking_id,
            user_id: user.id,
            succeeded: payload.succeeded,
            transaction_id: payload.transaction_id,
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(ResponseDto::new(
            StatusCode::OK,
            booking.into_dto(),
            "Payment recorded",
        )),
    ))
}

/// Cancel one of the caller's pending bookings.
///
/// Cancellation is a status flip; the booking remains readable.
///
/// # Access Control
/// - Authenticated user; foreign bookings read as not found
///
/// # Returns
/// - `200 OK` - Cancelled booking in the success envelope
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Unknown or foreign booking id
/// - `409 Conflict` - Booking already settled
#[utoipa::path(
    post,
    path = "/api/bookings/{booking_id}/cancel",
    tag = BOOKING_TAG,
    params(
        ("booking_id" = i32, Path, description = "Booking id")
    ),
    responses(
        (status = 200, description = "Booking cancelled", body = BookingDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 409, description = "Booking already settled", body = ErrorDto)
    ),
)]
pub async fn cancel_booking(
    State(state): State<AppState>,
    session: Session,
    Path(booking_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let booking = BookingService::new(&state.db)
        .cancel(booking_id, user.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ResponseDto::new(
            StatusCode::OK,
            booking.into_dto(),
            "Booking cancelled",
        )),
    ))
}
