//! Authentication service for registration, login, and OTP flows.
//!
//! This module provides the `AuthService` orchestrating user creation, credential
//! verification, and one-time-code state between the controllers and the user
//! repository. Email normalization (trim + lowercase) happens here, once, before
//! any lookup or write. Uniqueness is left to the storage layer's unique index;
//! the repository surfaces violations as conflicts.

use sea_orm::DatabaseConnection;

use crate::{
    model::user::{SignUpDto, WebhookSignUpDto},
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        model::user::{
            CreateExternalUserParam, CreateUserParam, SetOtpParam, UpdatePasswordParam, User,
        },
        service::{otp, password},
    },
};

/// Service providing business logic for authentication and account state.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a password-based user.
    ///
    /// Rejects blank email or password, normalizes the email, hashes the
    /// password, and creates the record with a fresh OTP for verification.
    /// Exactly one write occurs on success; a duplicate email writes nothing
    /// and surfaces as a conflict.
    ///
    /// # Arguments
    /// - `payload` - Raw sign-up payload from the wire
    ///
    /// # Returns
    /// - `Ok(User)` - The created, unverified user
    /// - `Err(AppError::Validation)` - Blank email or password
    /// - `Err(AppError::Conflict)` - Email already registered
    pub async fn register(&self, payload: SignUpDto) -> Result<User, AppError> {
        let mut errors = Vec::new();
        if payload.email.trim().is_empty() {
            errors.push("email is required".to_string());
        }
        if payload.password.trim().is_empty() {
            errors.push("password is required".to_string());
        }
        if !errors.is_empty() {
            return Err(AppError::Validation {
                message: "Email and password are required".to_string(),
                errors,
            });
        }

        let email = normalize_email(&payload.email);
        let password_hash = password::hash_password(&payload.password)?;
        let (otp_code, otp_expires_at) = otp::generate();

        // Display name defaults to the mailbox part until the user sets one.
        let name = email.split('@').next().unwrap_or_default().to_string();

        let user = UserRepository::new(self.db)
            .create(CreateUserParam {
                email,
                password_hash,
                name,
                otp_code,
                otp_expires_at,
            })
            .await?;

        tracing::debug!(user_id = user.id, "verification code issued for new account");

        Ok(user)
    }

    /// Creates a user from webhook-delivered external identity fields.
    ///
    /// The provider has already verified the address, so the account is
    /// created verified and without a password. This variant reports a
    /// duplicate email as 400 rather than 409, matching its caller's
    /// expectations.
    ///
    /// # Arguments
    /// - `payload` - Identity fields from the provider webhook
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::Validation)` - Blank email or external id
    /// - `Err(AppError::BadRequest)` - Email already registered
    pub async fn register_external(&self, payload: WebhookSignUpDto) -> Result<User, AppError> {
        let mut errors = Vec::new();
        if payload.id.trim().is_empty() {
            errors.push("id is required".to_string());
        }
        if payload.email.trim().is_empty() {
            errors.push("email is required".to_string());
        }
        if !errors.is_empty() {
            return Err(AppError::Validation {
                message: "Identity fields are incomplete".to_string(),
                errors,
            });
        }

        let email = normalize_email(&payload.email);
        let name = derive_display_name(&payload.first_name, &payload.last_name, &email);

        UserRepository::new(self.db)
            .create_external(CreateExternalUserParam {
                external_id: payload.id,
                email,
                name,
            })
            .await
            .map_err(|err| match err {
                AppError::Conflict(message) => AppError::BadRequest(message),
                other => other,
            })
    }

    /// Verifies an email/password pair and returns the account.
    ///
    /// Unknown emails, password-less external identities, and wrong passwords
    /// all produce the same credentials error. Unverified accounts are
    /// rejected after the credential check.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials valid and account verified
    /// - `Err(AppError::AuthErr)` - Invalid credentials or unverified account
    pub async fn login(&self, email: &str, submitted_password: &str) -> Result<User, AppError> {
        let email = normalize_email(email);

        let Some(user) = UserRepository::new(self.db).find_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        let Some(stored_hash) = user.password_hash.as_deref() else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !password::verify_password(stored_hash, submitted_password)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        if !user.verified {
            return Err(AuthError::AccountNotVerified.into());
        }

        Ok(user)
    }

    /// Confirms an OTP and marks the account verified.
    ///
    /// # Returns
    /// - `Ok(User)` - Account is now verified, OTP cleared
    /// - `Err(AppError::NotFound)` - No account for that email
    /// - `Err(AppError::AuthErr)` - Missing, expired, or mismatched code
    pub async fn verify_otp(&self, email: &str, submitted: &str) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);
        let mut user = self.find_by_email_required(&repo, email).await?;

        otp::check(&user, submitted)?;

        repo.mark_verified(user.id).await?;
        user.verified = true;
        user.otp_code = None;
        user.otp_expires_at = None;

        Ok(user)
    }

    /// Rotates the OTP for a not-yet-verified account.
    ///
    /// # Returns
    /// - `Ok(())` - A fresh code has been issued
    /// - `Err(AppError::NotFound)` - No account for that email
    /// - `Err(AppError::BadRequest)` - Account is already verified
    pub async fn resend_otp(&self, email: &str) -> Result<(), AppError> {
        let repo = UserRepository::new(self.db);
        let user = self.find_by_email_required(&repo, email).await?;

        if user.verified {
            return Err(AppError::BadRequest(
                "Account is already verified".to_string(),
            ));
        }

        self.issue_otp(&repo, user.id).await
    }

    /// Issues a password-reset OTP for an existing account.
    ///
    /// # Returns
    /// - `Ok(())` - A reset code has been issued
    /// - `Err(AppError::NotFound)` - No account for that email
    pub async fn forgot_password(&self, email: &str) -> Result<(), AppError> {
        let repo = UserRepository::new(self.db);
        let user = self.find_by_email_required(&repo, email).await?;

        self.issue_otp(&repo, user.id).await
    }

    /// Replaces the password after checking the reset OTP.
    ///
    /// # Returns
    /// - `Ok(())` - Password replaced, OTP cleared
    /// - `Err(AppError::Validation)` - Blank new password
    /// - `Err(AppError::NotFound)` - No account for that email
    /// - `Err(AppError::AuthErr)` - Missing, expired, or mismatched code
    pub async fn update_password(
        &self,
        email: &str,
        submitted_otp: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        if new_password.trim().is_empty() {
            return Err(AppError::validation(
                "Password is required",
                "password is required",
            ));
        }

        let repo = UserRepository::new(self.db);
        let user = self.find_by_email_required(&repo, email).await?;

        otp::check(&user, submitted_otp)?;

        let password_hash = password::hash_password(new_password)?;
        repo.update_password(UpdatePasswordParam {
            user_id: user.id,
            password_hash,
        })
        .await?;

        Ok(())
    }

    async fn find_by_email_required(
        &self,
        repo: &UserRepository<'_>,
        email: &str,
    ) -> Result<User, AppError> {
        let email = normalize_email(email);
        repo.find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    async fn issue_otp(&self, repo: &UserRepository<'_>, user_id: i32) -> Result<(), AppError> {
        let (otp_code, otp_expires_at) = otp::generate();

        repo.set_otp(SetOtpParam {
            user_id,
            otp_code,
            otp_expires_at,
        })
        .await?;

        tracing::debug!(user_id, "verification code rotated");

        Ok(())
    }
}

/// Normalizes an email for lookup and storage.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Builds a display name from provider-supplied name parts, falling back to
/// the mailbox part of the email when both are blank.
fn derive_display_name(first_name: &str, last_name: &str, email: &str) -> String {
    let full = format!("{} {}", first_name.trim(), last_name.trim());
    let full = full.trim();

    if full.is_empty() {
        email.split('@').next().unwrap_or_default().to_string()
    } else {
        full.to_string()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use sea_orm::PaginatorTrait;
    use test_utils::builder::TestBuilder;

    /// Tests email normalization.
    ///
    /// Expected: surrounding whitespace removed and characters lowercased.
    #[test]
    fn normalizes_email() {
        assert_eq!(normalize_email("  Trekker@Example.COM "), "trekker@example.com");
    }

    /// Tests display-name derivation from webhook name parts.
    ///
    /// Expected: joined first/last, falling back to the mailbox part.
    #[test]
    fn derives_display_name() {
        assert_eq!(derive_display_name("Alex", "Rivers", "a@b.com"), "Alex Rivers");
        assert_eq!(derive_display_name("Alex", "", "a@b.com"), "Alex");
        assert_eq!(derive_display_name("", "  ", "alex@b.com"), "alex");
    }

    fn sign_up(email: &str, password: &str) -> SignUpDto {
        SignUpDto {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    async fn user_db() -> test_utils::context::TestContext {
        TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap()
    }

    /// Tests that registration lowercases the email and writes exactly one record.
    ///
    /// Expected: Ok, stored email lowercased, user count is 1, OTP outstanding.
    #[tokio::test]
    async fn register_creates_one_lowercased_record() {
        let test = user_db().await;
        let db = test.db.as_ref().unwrap();

        let user = AuthService::new(db)
            .register(sign_up("  Trekker@Example.COM ", "summit-pass-1"))
            .await
            .unwrap();

        assert_eq!(user.email, "trekker@example.com");
        assert!(!user.verified);
        assert!(user.otp_code.is_some());

        let count = entity::prelude::User::find().count(db).await.unwrap();
        assert_eq!(count, 1);
    }

    /// Tests that blank email and password are both reported.
    ///
    /// Expected: Err(Validation) with two field details and no write.
    #[tokio::test]
    async fn register_rejects_blank_input() {
        let test = user_db().await;
        let db = test.db.as_ref().unwrap();

        let result = AuthService::new(db).register(sign_up("  ", "")).await;

        match result {
            Err(AppError::Validation { errors, .. }) => assert_eq!(errors.len(), 2),
            other => panic!("expected validation error, got {:?}", other.map(|u| u.email)),
        }

        let count = entity::prelude::User::find().count(db).await.unwrap();
        assert_eq!(count, 0);
    }

    /// Tests that a duplicate registration conflicts and leaves the count unchanged.
    ///
    /// Expected: Err(Conflict) on the second call, still one record.
    #[tokio::test]
    async fn register_duplicate_conflicts() {
        let test = user_db().await;
        let db = test.db.as_ref().unwrap();
        let service = AuthService::new(db);

        service
            .register(sign_up("trekker@example.com", "summit-pass-1"))
            .await
            .unwrap();
        let result = service
            .register(sign_up("TREKKER@example.com", "other-pass"))
            .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
        let count = entity::prelude::User::find().count(db).await.unwrap();
        assert_eq!(count, 1);
    }

    /// Tests that the webhook variant reports duplicates as a 400-class error.
    ///
    /// Expected: Err(BadRequest) rather than Conflict.
    #[tokio::test]
    async fn webhook_duplicate_is_bad_request() {
        let test = user_db().await;
        let db = test.db.as_ref().unwrap();
        let service = AuthService::new(db);

        let payload = |id: &str| WebhookSignUpDto {
            id: id.to_string(),
            email: "Alex.Rivers@Example.com".to_string(),
            first_name: "Alex".to_string(),
            last_name: "Rivers".to_string(),
        };

        let user = service.register_external(payload("prov_1")).await.unwrap();
        assert_eq!(user.email, "alex.rivers@example.com");
        assert_eq!(user.name, "Alex Rivers");
        assert!(user.verified);

        let result = service.register_external(payload("prov_2")).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    /// Tests the verify-then-login flow end to end.
    ///
    /// Expected: login blocked before verification, allowed after, and wrong
    /// passwords rejected with the same credentials error as unknown emails.
    #[tokio::test]
    async fn verify_then_login_flow() {
        let test = user_db().await;
        let db = test.db.as_ref().unwrap();
        let service = AuthService::new(db);

        service
            .register(sign_up("trekker@example.com", "summit-pass-1"))
            .await
            .unwrap();

        let blocked = service.login("trekker@example.com", "summit-pass-1").await;
        assert!(matches!(
            blocked,
            Err(AppError::AuthErr(AuthError::AccountNotVerified))
        ));

        // The issued code is random; read it back the way the mailer would.
        let stored = UserRepository::new(db)
            .find_by_email("trekker@example.com")
            .await
            .unwrap()
            .unwrap();
        let code = stored.otp_code.unwrap();

        let verified = service.verify_otp("trekker@example.com", &code).await.unwrap();
        assert!(verified.verified);

        let user = service
            .login("Trekker@Example.com", "summit-pass-1")
            .await
            .unwrap();
        assert_eq!(user.email, "trekker@example.com");

        let wrong = service.login("trekker@example.com", "wrong-pass").await;
        assert!(matches!(
            wrong,
            Err(AppError::AuthErr(AuthError::InvalidCredentials))
        ));
        let unknown = service.login("nobody@example.com", "summit-pass-1").await;
        assert!(matches!(
            unknown,
            Err(AppError::AuthErr(AuthError::InvalidCredentials))
        ));
    }

    /// Tests the forgot/update password flow.
    ///
    /// Expected: reset code rotates, the new password logs in, the old does not.
    #[tokio::test]
    async fn password_reset_flow() {
        let test = user_db().await;
        let db = test.db.as_ref().unwrap();
        let service = AuthService::new(db);
        let repo = UserRepository::new(db);

        service
            .register(sign_up("trekker@example.com", "old-pass"))
            .await
            .unwrap();
        let first_code = repo
            .find_by_email("trekker@example.com")
            .await
            .unwrap()
            .unwrap()
            .otp_code
            .unwrap();
        service.verify_otp("trekker@example.com", &first_code).await.unwrap();

        service.forgot_password("trekker@example.com").await.unwrap();
        let reset_code = repo
            .find_by_email("trekker@example.com")
            .await
            .unwrap()
            .unwrap()
            .otp_code
            .unwrap();

        let bad = service
            .update_password("trekker@example.com", "000000", "new-pass")
            .await;
        assert!(bad.is_err());

        service
            .update_password("trekker@example.com", &reset_code, "new-pass")
            .await
            .unwrap();

        assert!(service.login("trekker@example.com", "new-pass").await.is_ok());
        let old = service.login("trekker@example.com", "old-pass").await;
        assert!(matches!(
            old,
            Err(AppError::AuthErr(AuthError::InvalidCredentials))
        ));
    }

    /// Tests resend rules.
    ///
    /// Expected: unknown emails 404, verified accounts rejected, unverified rotate.
    #[tokio::test]
    async fn resend_otp_rules() {
        let test = user_db().await;
        let db = test.db.as_ref().unwrap();
        let service = AuthService::new(db);
        let repo = UserRepository::new(db);

        let missing = service.resend_otp("nobody@example.com").await;
        assert!(matches!(missing, Err(AppError::NotFound(_))));

        service
            .register(sign_up("trekker@example.com", "summit-pass-1"))
            .await
            .unwrap();

        service.resend_otp("trekker@example.com").await.unwrap();
        let code = repo
            .find_by_email("trekker@example.com")
            .await
            .unwrap()
            .unwrap()
            .otp_code
            .unwrap();

        service.verify_otp("trekker@example.com", &code).await.unwrap();
        let verified_resend = service.resend_otp("trekker@example.com").await;
        assert!(matches!(verified_resend, Err(AppError::BadRequest(_))));
    }
}
