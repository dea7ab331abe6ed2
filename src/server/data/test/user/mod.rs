use chrono::{Duration, Utc};
use sea_orm::{DbErr, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParam, SetOtpParam, UpdatePasswordParam},
};

mod create;
mod find;
mod otp_state;
mod update_password;

fn create_param(email: &str) -> CreateUserParam {
    CreateUserParam {
        email: email.to_string(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$placeholder".to_string(),
        name: email.split('@').next().unwrap().to_string(),
        otp_code: "123456".to_string(),
        otp_expires_at: Utc::now() + Duration::minutes(10),
    }
}
