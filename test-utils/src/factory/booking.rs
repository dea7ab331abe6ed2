//! Booking factory for creating test bookings with line items.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use entity::item_booking::{BookingStatus, PaymentMode};

/// Factory for creating test bookings with customizable fields.
///
/// Creates the booking header; add lines with `line()` before `build()` or
/// use `create_booking` for a single-line default.
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    status: BookingStatus,
    amount: f64,
    payment_mode: PaymentMode,
    lines: Vec<(i32, i32)>,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory with default values.
    ///
    /// Defaults:
    /// - status: `Pending`
    /// - amount: `50.0`
    /// - payment_mode: `Card`
    /// - no lines
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entities
    /// - `user_id` - Owning user id
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            status: BookingStatus::Pending,
            amount: 50.0,
            payment_mode: PaymentMode::Card,
            lines: Vec::new(),
        }
    }

    /// Sets the booking status.
    pub fn status(mut self, status: BookingStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the booking amount.
    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = amount;
        self
    }

    /// Sets the payment mode.
    pub fn payment_mode(mut self, payment_mode: PaymentMode) -> Self {
        self.payment_mode = payment_mode;
        self
    }

    /// Adds a line for the given item and quantity.
    pub fn line(mut self, item_id: i32, quantity: i32) -> Self {
        self.lines.push((item_id, quantity));
        self
    }

    /// Builds and inserts the booking and its lines into the database.
    ///
    /// # Returns
    /// - `Ok(entity::item_booking::Model)` - Created booking header entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::item_booking::Model, DbErr> {
        let booking = entity::item_booking::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            status: ActiveValue::Set(self.status),
            transaction_id: ActiveValue::Set(None),
            amount: ActiveValue::Set(self.amount),
            payment_mode: ActiveValue::Set(self.payment_mode),
            booked_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for (item_id, quantity) in self.lines {
            entity::booking_item::ActiveModel {
                booking_id: ActiveValue::Set(booking.id),
                item_id: ActiveValue::Set(item_id),
                quantity: ActiveValue::Set(quantity),
                start_date: ActiveValue::Set(None),
                end_date: ActiveValue::Set(None),
                purchased: ActiveValue::Set(false),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(booking)
    }
}

/// Creates a pending single-line booking with default values.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Owning user id
/// - `item_id` - Item to book (quantity 1)
pub async fn create_booking(
    db: &DatabaseConnection,
    user_id: i32,
    item_id: i32,
) -> Result<entity::item_booking::Model, DbErr> {
    BookingFactory::new(db, user_id).line(item_id, 1).build().await
}
