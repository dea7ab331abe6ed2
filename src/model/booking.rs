use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    pub id: i32,
    /// One of `pending`, `confirmed`, `cancelled`.
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    pub amount: f64,
    /// One of `card`, `cash`.
    pub payment_mode: String,
    pub booked_at: DateTime<Utc>,
    pub items: Vec<BookingItemDto>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingItemDto {
    pub item_id: i32,
    pub quantity: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub purchased: bool,
}

/// Checkout payload.
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingDto {
    #[serde(default)]
    pub items: Vec<CreateBookingItemDto>,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub payment_mode: String,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingItemDto {
    pub item_id: i32,
    pub quantity: i32,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

/// Settlement outcome reported by the payment collaborator.
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResultDto {
    pub succeeded: bool,
    #[serde(default)]
    pub transaction_id: Option<String>,
}
