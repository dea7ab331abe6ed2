//! HTTP request handlers.
//!
//! Controllers validate access, convert DTOs to parameter models, call the
//! service layer, and wrap results in the uniform response envelope. Expected
//! failures are raised as `AppError`; the error boundary renders them.

pub mod achievement;
pub mod auth;
pub mod booking;
pub mod geo;
pub mod health;
pub mod payment;
