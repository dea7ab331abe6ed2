//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles user creation, credential lookups, and OTP state updates with conversion
//! between entity models and domain models at the infrastructure boundary.
//!
//! Duplicate emails are not pre-checked: the schema's unique index is the
//! arbiter, and the resulting unique-constraint violation is surfaced as a
//! conflict error. This closes the race window a check-then-insert would leave
//! between concurrent signups.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, SqlErr,
};

use crate::server::{
    error::AppError,
    model::user::{
        CreateExternalUserParam, CreateUserParam, SetOtpParam, UpdatePasswordParam, User,
    },
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a password-based user with an outstanding OTP.
    ///
    /// The caller provides a normalized email and an already-hashed password.
    /// A unique-constraint violation on the email column maps to a conflict
    /// error; no row is written in that case.
    ///
    /// # Arguments
    /// - `param` - Creation parameters (email, password hash, name, OTP state)
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::Conflict)` - A user with that email already exists
    /// - `Err(AppError::DbErr)` - Other database error during insert
    pub async fn create(&self, param: CreateUserParam) -> Result<User, AppError> {
        let now = Utc::now();

        let result = entity::user::ActiveModel {
            email: ActiveValue::Set(param.email),
            password_hash: ActiveValue::Set(Some(param.password_hash)),
            external_id: ActiveValue::Set(None),
            name: ActiveValue::Set(param.name),
            role: ActiveValue::Set(entity::user::UserRole::User),
            verified: ActiveValue::Set(false),
            otp_code: ActiveValue::Set(Some(param.otp_code)),
            otp_expires_at: ActiveValue::Set(Some(param.otp_expires_at)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await;

        Self::map_unique_violation(result).map(User::from_entity)
    }

    /// Creates a user from webhook-delivered external identity fields.
    ///
    /// External identities have no password and are considered verified by the
    /// provider. Duplicate emails map to a conflict error, as in `create`.
    pub async fn create_external(
        &self,
        param: CreateExternalUserParam,
    ) -> Result<User, AppError> {
        let now = Utc::now();

        let result = entity::user::ActiveModel {
            email: ActiveValue::Set(param.email),
            password_hash: ActiveValue::Set(None),
            external_id: ActiveValue::Set(Some(param.external_id)),
            name: ActiveValue::Set(param.name),
            role: ActiveValue::Set(entity::user::UserRole::User),
            verified: ActiveValue::Set(true),
            otp_code: ActiveValue::Set(None),
            otp_expires_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await;

        Self::map_unique_violation(result).map(User::from_entity)
    }

    /// Finds a user by normalized email.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by primary key.
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Replaces a user's outstanding OTP.
    ///
    /// Used by resend and forgot-password flows to rotate the code and push
    /// out the expiry.
    pub async fn set_otp(&self, param: SetOtpParam) -> Result<(), DbErr> {
        let active = entity::user::ActiveModel {
            id: ActiveValue::Unchanged(param.user_id),
            otp_code: ActiveValue::Set(Some(param.otp_code)),
            otp_expires_at: ActiveValue::Set(Some(param.otp_expires_at)),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        };
        active.update(self.db).await?;

        Ok(())
    }

    /// Marks a user verified and clears the OTP state.
    pub async fn mark_verified(&self, user_id: i32) -> Result<(), DbErr> {
        let active = entity::user::ActiveModel {
            id: ActiveValue::Unchanged(user_id),
            verified: ActiveValue::Set(true),
            otp_code: ActiveValue::Set(None),
            otp_expires_at: ActiveValue::Set(None),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        };
        active.update(self.db).await?;

        Ok(())
    }

    /// Replaces a user's password hash and clears the OTP state.
    pub async fn update_password(&self, param: UpdatePasswordParam) -> Result<(), DbErr> {
        let active = entity::user::ActiveModel {
            id: ActiveValue::Unchanged(param.user_id),
            password_hash: ActiveValue::Set(Some(param.password_hash)),
            otp_code: ActiveValue::Set(None),
            otp_expires_at: ActiveValue::Set(None),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        };
        active.update(self.db).await?;

        Ok(())
    }

    /// Maps a unique-constraint violation from an insert into a conflict error.
    fn map_unique_violation(
        result: Result<entity::user::Model, DbErr>,
    ) -> Result<entity::user::Model, AppError> {
        result.map_err(|err| match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                AppError::Conflict("User already exists".to_string())
            }
            _ => AppError::DbErr(err),
        })
    }
}
