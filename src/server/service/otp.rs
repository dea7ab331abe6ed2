//! One-time verification code issuance.
//!
//! Codes are 6-digit numerics with a short expiry; delivery (email/SMS) is an
//! external collaborator, this module only generates and checks state.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::server::{error::auth::AuthError, model::user::User};

/// Minutes an issued code stays valid.
pub const OTP_TTL_MINUTES: i64 = 10;

/// Generates a fresh 6-digit code with its expiry timestamp.
pub fn generate() -> (String, DateTime<Utc>) {
    let mut rng = rand::rng();
    let code: u32 = rng.random_range(100_000..1_000_000);

    (code.to_string(), Utc::now() + Duration::minutes(OTP_TTL_MINUTES))
}

/// Checks a submitted code against a user's outstanding OTP state.
///
/// # Returns
/// - `Ok(())` - Code matches and is within its expiry
/// - `Err(AuthError::OtpNotIssued)` - No code is outstanding
/// - `Err(AuthError::OtpExpired)` - Code is past its expiry
/// - `Err(AuthError::OtpMismatch)` - Code does not match
pub fn check(user: &User, submitted: &str) -> Result<(), AuthError> {
    let (Some(code), Some(expires_at)) = (&user.otp_code, user.otp_expires_at) else {
        return Err(AuthError::OtpNotIssued);
    };

    if expires_at < Utc::now() {
        return Err(AuthError::OtpExpired);
    }

    if code != submitted {
        return Err(AuthError::OtpMismatch);
    }

    Ok(())
}
