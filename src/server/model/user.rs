//! User domain models and parameters.
//!
//! Provides the application user with credential and verification state, plus
//! parameter types for the registration, login, and OTP flows. Conversion into
//! `UserDto` is the sanitization point: credential material never leaves this
//! module in a wire shape.

use chrono::{DateTime, Utc};

use crate::model::user::UserDto;

/// Application user with credential and verification state.
///
/// The persistence schema also carries the role and update timestamp; this
/// slice never branches on them, so they stay at the entity layer.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Always stored lowercased.
    pub email: String,
    /// Argon2 PHC string; `None` for webhook-created identities.
    pub password_hash: Option<String>,
    /// Identity id assigned by the external auth provider.
    pub external_id: Option<String>,
    pub name: String,
    pub verified: bool,
    pub otp_code: Option<String>,
    pub otp_expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            password_hash: entity.password_hash,
            external_id: entity.external_id,
            name: entity.name,
            verified: entity.verified,
            otp_code: entity.otp_code,
            otp_expires_at: entity.otp_expires_at,
            created_at: entity.created_at,
        }
    }

    /// Converts the user domain model to the sanitized DTO for API responses.
    ///
    /// Drops the password hash, OTP state, and external id.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            verified: self.verified,
            created_at: self.created_at,
        }
    }
}

/// Parameters for password-based registration.
///
/// The email is expected pre-normalized (lowercased, trimmed) and the
/// password already hashed by the service layer.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub otp_code: String,
    pub otp_expires_at: DateTime<Utc>,
}

/// Parameters for webhook-driven identity creation.
#[derive(Debug, Clone)]
pub struct CreateExternalUserParam {
    pub external_id: String,
    pub email: String,
    pub name: String,
}

/// Parameters for rotating a user's OTP.
#[derive(Debug, Clone)]
pub struct SetOtpParam {
    pub user_id: i32,
    pub otp_code: String,
    pub otp_expires_at: DateTime<Utc>,
}

/// Parameters for replacing a user's password hash.
#[derive(Debug, Clone)]
pub struct UpdatePasswordParam {
    pub user_id: i32,
    pub password_hash: String,
}
