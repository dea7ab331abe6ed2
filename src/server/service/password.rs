//! Password hashing and verification.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::server::error::AppError;

/// Hashes a plain-text password with Argon2 and a fresh random salt.
///
/// # Arguments
/// - `password` - The plain-text password to hash
///
/// # Returns
/// - `Ok(String)` - PHC-format hash string for storage
/// - `Err(AppError::InternalError)` - Hashing failed
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| AppError::InternalError(format!("Password hashing failed: {}", err)))
}

/// Verifies a plain-text password against a stored PHC-format hash.
///
/// # Arguments
/// - `stored_hash` - The stored hash string
/// - `password` - The plain-text password to check
///
/// # Returns
/// - `Ok(true)` - Password matches
/// - `Ok(false)` - Password does not match
/// - `Err(AppError::InternalError)` - Stored hash could not be parsed
pub fn verify_password(stored_hash: &str, password: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|err| AppError::InternalError(format!("Stored password hash is invalid: {}", err)))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
