use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, ResponseDto},
        user::{
            ForgotPasswordDto, LoginDto, ResendOtpDto, SignUpDto, UpdatePasswordDto, UserDto,
            VerifyOtpDto, WebhookSignUpDto,
        },
    },
    server::{
        error::AppError, middleware::session::AuthSession, service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new user with email and password.
///
/// Validates the payload, normalizes the email, and creates an unverified
/// account with an outstanding verification code. Duplicate emails are
/// rejected without writing anything.
///
/// # Returns
/// - `201 Created` - Sanitized user in the success envelope
/// - `400 Bad Request` - Blank email or password
/// - `409 Conflict` - Email already registered
#[utoipa::path(
    post,
    path = "/signUp",
    tag = AUTH_TAG,
    request_body = SignUpDto,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 400, description = "Blank email or password", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto)
    ),
)]
pub async fn sign_up(
    State(state): State<AppState>,
    Json(payload): Json<SignUpDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db).register(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ResponseDto::new(
            StatusCode::CREATED,
            user.into_dto(),
            "User registered successfully",
        )),
    ))
}

/// Create a user from the auth provider's webhook.
///
/// The provider delivers an external identity (id, email, name parts); the
/// account is created verified and without a password. This variant reports
/// duplicates as 400.
///
/// # Returns
/// - `201 Created` - Sanitized user in the success envelope
/// - `400 Bad Request` - Incomplete identity fields or duplicate email
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    tag = AUTH_TAG,
    request_body = WebhookSignUpDto,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 400, description = "Incomplete identity or duplicate email", body = ErrorDto)
    ),
)]
pub async fn webhook_sign_up(
    State(state): State<AppState>,
    Json(payload): Json<WebhookSignUpDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db).register_external(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ResponseDto::new(
            StatusCode::CREATED,
            user.into_dto(),
            "User registered successfully",
        )),
    ))
}

/// Log in with email and password.
///
/// On success the user id is stored in the session.
///
/// # Returns
/// - `200 OK` - Sanitized user in the success envelope
/// - `401 Unauthorized` - Invalid credentials
/// - `403 Forbidden` - Account not verified yet
#[utoipa::path(
    post,
    path = "/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 403, description = "Account not verified", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .login(&payload.email, &payload.password)
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(ResponseDto::new(
            StatusCode::OK,
            user.into_dto(),
            "Logged in successfully",
        )),
    ))
}

/// Log out the current session.
///
/// # Returns
/// - `200 OK` - Session cleared
#[utoipa::path(
    post,
    path = "/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Session cleared")
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok((
        StatusCode::OK,
        Json(ResponseDto::new(
            StatusCode::OK,
            serde_json::Value::Null,
            "Logged out successfully",
        )),
    ))
}

/// Confirm a verification code.
///
/// # Returns
/// - `200 OK` - Account verified, sanitized user in the envelope
/// - `400 Bad Request` - Missing, expired, or mismatched code
/// - `404 Not Found` - No account for that email
#[utoipa::path(
    post,
    path = "/verifyOtp",
    tag = AUTH_TAG,
    request_body = VerifyOtpDto,
    responses(
        (status = 200, description = "Account verified", body = UserDto),
        (status = 400, description = "Bad verification code", body = ErrorDto),
        (status = 404, description = "Unknown email", body = ErrorDto)
    ),
)]
pub async fn verify_otp(
    State(state): State<AppState>,
    Json(payload): Json<VerifyOtpDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .verify_otp(&payload.email, &payload.otp)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ResponseDto::new(
            StatusCode::OK,
            user.into_dto(),
            "Account verified successfully",
        )),
    ))
}

/// Rotate the verification code for an unverified account.
///
/// # Returns
/// - `200 OK` - Fresh code issued
/// - `400 Bad Request` - Account already verified
/// - `404 Not Found` - No account for that email
#[utoipa::path(
    post,
    path = "/resendOtp",
    tag = AUTH_TAG,
    request_body = ResendOtpDto,
    responses(
        (status = 200, description = "Fresh code issued"),
        (status = 400, description = "Account already verified", body = ErrorDto),
        (status = 404, description = "Unknown email", body = ErrorDto)
    ),
)]
pub async fn resend_otp(
    State(state): State<AppState>,
    Json(payload): Json<ResendOtpDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthService::new(&state.db).resend_otp(&payload.email).await?;

    Ok((
        StatusCode::OK,
        Json(ResponseDto::new(
            StatusCode::OK,
            serde_json::Value::Null,
            "Verification code sent",
        )),
    ))
}

/// Start a password reset by issuing a reset code.
///
/// # Returns
/// - `200 OK` - Reset code issued
/// - `404 Not Found` - No account for that email
#[utoipa::path(
    post,
    path = "/forgotPassword",
    tag = AUTH_TAG,
    request_body = ForgotPasswordDto,
    responses(
        (status = 200, description = "Reset code issued"),
        (status = 404, description = "Unknown email", body = ErrorDto)
    ),
)]
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(payload): Json<ForgotPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthService::new(&state.db)
        .forgot_password(&payload.email)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ResponseDto::new(
            StatusCode::OK,
            serde_json::Value::Null,
            "Password reset code sent",
        )),
    ))
}

/// Replace the password using a reset code.
///
/// # Returns
/// - `200 OK` - Password updated
/// - `400 Bad Request` - Blank password or bad reset code
/// - `404 Not Found` - No account for that email
#[utoipa::path(
    post,
    path = "/updatePassword",
    tag = AUTH_TAG,
    request_body = UpdatePasswordDto,
    responses(
        (status = 200, description = "Password updated"),
        (status = 400, description = "Blank password or bad reset code", body = ErrorDto),
        (status = 404, description = "Unknown email", body = ErrorDto)
    ),
)]
pub async fn update_password(
    State(state): State<AppState>,
    Json(payload): Json<UpdatePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthService::new(&state.db)
        .update_password(&payload.email, &payload.otp, &payload.password)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ResponseDto::new(
            StatusCode::OK,
            serde_json::Value::Null,
            "Password updated successfully",
        )),
    ))
}
