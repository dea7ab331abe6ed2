use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Sanitized user representation.
///
/// Deliberately excludes the password hash, OTP state, role, and the external
/// provider id; this is the only user shape that crosses the wire.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}

/// Payload for password-based registration.
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignUpDto {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Identity fields delivered by the auth provider's webhook.
///
/// The provider also sends a creation timestamp; it is ignored, the record
/// carries its own.
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WebhookSignUpDto {
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginDto {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpDto {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub otp: String,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResendOtpDto {
    #[serde(default)]
    pub email: String,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ForgotPasswordDto {
    #[serde(default)]
    pub email: String,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordDto {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub otp: String,
    #[serde(default)]
    pub password: String,
}

#[cfg(test)]
mod test {
    use super::*;

    /// Tests that the serialized user never leaks credential material.
    ///
    /// Expected: no password, hash, otp, or role keys in the JSON.
    #[test]
    fn user_dto_is_sanitized() {
        let dto = UserDto {
            id: 1,
            email: "trekker@example.com".to_string(),
            name: "Trekker".to_string(),
            verified: true,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&dto).unwrap();
        let keys: Vec<String> = json
            .as_object()
            .unwrap()
            .keys()
            .map(|k| k.to_lowercase())
            .collect();

        assert_eq!(keys.len(), 5);
        for key in &keys {
            assert!(!key.contains("password"));
            assert!(!key.contains("hash"));
            assert!(!key.contains("otp"));
            assert!(!key.contains("role"));
        }
    }
}
