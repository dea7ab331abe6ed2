//! Booking domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};
use entity::item_booking::{BookingStatus, PaymentMode};

use crate::model::booking::{BookingDto, BookingItemDto};

/// A user's reservation of one or more items.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i32,
    pub user_id: i32,
    pub status: BookingStatus,
    pub transaction_id: Option<String>,
    pub amount: f64,
    pub payment_mode: PaymentMode,
    pub booked_at: DateTime<Utc>,
    pub lines: Vec<BookingLine>,
}

/// One line of a booking.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingLine {
    pub item_id: i32,
    pub quantity: i32,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub purchased: bool,
}

impl Booking {
    /// Assembles a booking domain model from its entity rows at the repository boundary.
    pub fn from_entity(
        booking: entity::item_booking::Model,
        lines: Vec<entity::booking_item::Model>,
    ) -> Self {
        Self {
            id: booking.id,
            user_id: booking.user_id,
            status: booking.status,
            transaction_id: booking.transaction_id,
            amount: booking.amount,
            payment_mode: booking.payment_mode,
            booked_at: booking.booked_at,
            lines: lines.into_iter().map(BookingLine::from_entity).collect(),
        }
    }

    /// Converts the booking domain model to a DTO for API responses.
    pub fn into_dto(self) -> BookingDto {
        BookingDto {
            id: self.id,
            status: status_label(self.status).to_string(),
            transaction_id: self.transaction_id,
            amount: self.amount,
            payment_mode: payment_mode_label(self.payment_mode).to_string(),
            booked_at: self.booked_at,
            items: self.lines.into_iter().map(BookingLine::into_dto).collect(),
        }
    }
}

impl BookingLine {
    pub fn from_entity(entity: entity::booking_item::Model) -> Self {
        Self {
            item_id: entity.item_id,
            quantity: entity.quantity,
            start_date: entity.start_date,
            end_date: entity.end_date,
            purchased: entity.purchased,
        }
    }

    pub fn into_dto(self) -> BookingItemDto {
        BookingItemDto {
            item_id: self.item_id,
            quantity: self.quantity,
            start_date: self.start_date,
            end_date: self.end_date,
            purchased: self.purchased,
        }
    }
}

/// Wire label for a booking status.
pub fn status_label(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Pending => "pending",
        BookingStatus::Confirmed => "confirmed",
        BookingStatus::Cancelled => "cancelled",
    }
}

/// Wire label for a payment mode.
pub fn payment_mode_label(mode: PaymentMode) -> &'static str {
    match mode {
        PaymentMode::Card => "card",
        PaymentMode::Cash => "cash",
    }
}

/// Parses a wire payment-mode label.
pub fn parse_payment_mode(value: &str) -> Option<PaymentMode> {
    match value {
        "card" => Some(PaymentMode::Card),
        "cash" => Some(PaymentMode::Cash),
        _ => None,
    }
}

/// Parameters for creating a booking at checkout.
#[derive(Debug, Clone)]
pub struct CreateBookingParam {
    pub user_id: i32,
    pub amount: f64,
    pub payment_mode: PaymentMode,
    pub lines: Vec<CreateBookingLineParam>,
}

#[derive(Debug, Clone)]
pub struct CreateBookingLineParam {
    pub item_id: i32,
    pub quantity: i32,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Parameters for settling a booking's payment.
#[derive(Debug, Clone)]
pub struct SettlePaymentParam {
    pub booking_id: i32,
    pub user_id: i32,
    pub succeeded: bool,
    pub transaction_id: Option<String>,
}
