//! Booking data repository for database operations.
//!
//! Handles booking creation (header plus line items in one transaction),
//! per-user queries, and status settlement. Bookings are never deleted here;
//! cancellation is a status flip.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use entity::item_booking::BookingStatus;

use crate::server::model::booking::{Booking, CreateBookingParam};

/// Repository providing database operations for item bookings.
pub struct BookingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingRepository<'a> {
    /// Creates a new BookingRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a pending booking with its line items.
    ///
    /// The booking header and every line are written in a single transaction;
    /// a failed line insert rolls back the header.
    ///
    /// # Arguments
    /// - `param` - Validated checkout parameters
    ///
    /// # Returns
    /// - `Ok(Booking)` - The created booking with its lines
    /// - `Err(DbErr)` - Database error; nothing is persisted
    pub async fn create(&self, param: CreateBookingParam) -> Result<Booking, DbErr> {
        let txn = self.db.begin().await?;

        let booking = entity::item_booking::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            status: ActiveValue::Set(BookingStatus::Pending),
            transaction_id: ActiveValue::Set(None),
            amount: ActiveValue::Set(param.amount),
            payment_mode: ActiveValue::Set(param.payment_mode),
            booked_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let mut lines = Vec::with_capacity(param.lines.len());
        for line in param.lines {
            let inserted = entity::booking_item::ActiveModel {
                booking_id: ActiveValue::Set(booking.id),
                item_id: ActiveValue::Set(line.item_id),
                quantity: ActiveValue::Set(line.quantity),
                start_date: ActiveValue::Set(line.start_date),
                end_date: ActiveValue::Set(line.end_date),
                purchased: ActiveValue::Set(false),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
            lines.push(inserted);
        }

        txn.commit().await?;

        Ok(Booking::from_entity(booking, lines))
    }

    /// Finds a booking with its lines by primary key.
    pub async fn find_by_id(&self, booking_id: i32) -> Result<Option<Booking>, DbErr> {
        let Some(booking) = entity::prelude::ItemBooking::find_by_id(booking_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let lines = entity::prelude::BookingItem::find()
            .filter(entity::booking_item::Column::BookingId.eq(booking_id))
            .order_by_asc(entity::booking_item::Column::Id)
            .all(self.db)
            .await?;

        Ok(Some(Booking::from_entity(booking, lines)))
    }

    /// Lists a user's bookings with their lines, newest first.
    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<Booking>, DbErr> {
        let rows = entity::prelude::ItemBooking::find()
            .filter(entity::item_booking::Column::UserId.eq(user_id))
            .order_by_desc(entity::item_booking::Column::BookedAt)
            .find_with_related(entity::prelude::BookingItem)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(booking, lines)| Booking::from_entity(booking, lines))
            .collect())
    }

    /// Moves a booking to a settled status.
    ///
    /// Confirmation stores the transaction id and flips every line to
    /// purchased; cancellation leaves the lines untouched. The caller is
    /// responsible for transition legality checks.
    ///
    /// # Arguments
    /// - `booking_id` - Booking to settle
    /// - `status` - Target status (`Confirmed` or `Cancelled`)
    /// - `transaction_id` - Provider transaction id, when confirming
    ///
    /// # Returns
    /// - `Ok(Booking)` - The booking after the update
    /// - `Err(DbErr)` - Database error, including an unknown booking id
    pub async fn settle(
        &self,
        booking_id: i32,
        status: BookingStatus,
        transaction_id: Option<String>,
    ) -> Result<Booking, DbErr> {
        let txn = self.db.begin().await?;

        let active = entity::item_booking::ActiveModel {
            id: ActiveValue::Unchanged(booking_id),
            status: ActiveValue::Set(status),
            transaction_id: ActiveValue::Set(transaction_id),
            ..Default::default()
        };
        let booking = active.update(&txn).await?;

        if status == BookingStatus::Confirmed {
            entity::prelude::BookingItem::update_many()
                .filter(entity::booking_item::Column::BookingId.eq(booking_id))
                .col_expr(
                    entity::booking_item::Column::Purchased,
                    sea_orm::sea_query::Expr::value(true),
                )
                .exec(&txn)
                .await?;
        }

        txn.commit().await?;

        let lines = entity::prelude::BookingItem::find()
            .filter(entity::booking_item::Column::BookingId.eq(booking_id))
            .order_by_asc(entity::booking_item::Column::Id)
            .all(self.db)
            .await?;

        Ok(Booking::from_entity(booking, lines))
    }
}
