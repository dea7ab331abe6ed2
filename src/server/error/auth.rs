use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated user id is present in the session.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("No authenticated user in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    ///
    /// Results in a 401 Unauthorized response; the stale session cannot be
    /// trusted.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// Email/password pair did not match a stored credential.
    ///
    /// The message is deliberately identical for unknown email and wrong
    /// password. Results in a 401 Unauthorized response.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Login attempted before the account's email was verified.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Account email is not verified")]
    AccountNotVerified,

    /// An OTP operation was attempted while no code is outstanding.
    ///
    /// Results in a 400 Bad Request response.
    #[error("No verification code has been issued")]
    OtpNotIssued,

    /// The submitted OTP is past its expiry.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Verification code has expired")]
    OtpExpired,

    /// The submitted OTP does not match the issued one.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Invalid verification code")]
    OtpMismatch,
}

/// Converts authentication errors into HTTP responses.
///
/// Credential failures map to 401 with a message that does not reveal whether
/// the email exists; OTP failures map to 400 with their specific reason so the
/// client can prompt for a resend.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) | Self::InvalidCredentials => {
                StatusCode::UNAUTHORIZED
            }
            Self::AccountNotVerified => StatusCode::FORBIDDEN,
            Self::OtpNotIssued | Self::OtpExpired | Self::OtpMismatch => StatusCode::BAD_REQUEST,
        };

        let message = match &self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                "You must be logged in".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(ErrorDto::new(message))).into_response()
    }
}
