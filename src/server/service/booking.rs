//! Booking service for checkout and settlement business logic.
//!
//! Validates checkout input, owns the booking status transition rules, and
//! orchestrates the booking repository. Transitions are one-directional:
//! `pending` can settle to `confirmed` or `cancelled`; settled bookings
//! reject any further transition.

use sea_orm::DatabaseConnection;

use entity::item_booking::BookingStatus;

use crate::server::{
    data::booking::BookingRepository,
    error::AppError,
    model::booking::{Booking, CreateBookingParam, SettlePaymentParam},
};

/// Service providing business logic for item bookings.
pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    /// Creates a new BookingService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a pending booking from validated checkout input.
    ///
    /// Validation is fail-fast across fields but collects every line-level
    /// violation so the client sees all of them at once.
    ///
    /// # Arguments
    /// - `param` - Checkout parameters for the authenticated user
    ///
    /// # Returns
    /// - `Ok(Booking)` - The created pending booking
    /// - `Err(AppError::Validation)` - Empty cart, bad quantity, bad amount,
    ///   or incoherent date range
    pub async fn checkout(&self, param: CreateBookingParam) -> Result<Booking, AppError> {
        let mut errors = Vec::new();

        if param.lines.is_empty() {
            errors.push("at least one item is required".to_string());
        }
        if param.amount < 0.0 {
            errors.push("amount must not be negative".to_string());
        }
        for (index, line) in param.lines.iter().enumerate() {
            if line.quantity < 1 {
                errors.push(format!("items[{}].quantity must be at least 1", index));
            }
            if let (Some(start), Some(end)) = (line.start_date, line.end_date) {
                if end < start {
                    errors.push(format!("items[{}] end date precedes start date", index));
                }
            }
        }

        if !errors.is_empty() {
            return Err(AppError::Validation {
                message: "Invalid booking request".to_string(),
                errors,
            });
        }

        let booking = BookingRepository::new(self.db).create(param).await?;

        tracing::info!(booking_id = booking.id, "booking created");

        Ok(booking)
    }

    /// Lists the user's bookings, newest first.
    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<Booking>, AppError> {
        Ok(BookingRepository::new(self.db).list_for_user(user_id).await?)
    }

    /// Fetches one of the user's bookings.
    ///
    /// A booking owned by someone else is reported as not found rather than
    /// revealing its existence.
    pub async fn get_for_user(&self, booking_id: i32, user_id: i32) -> Result<Booking, AppError> {
        self.find_owned(booking_id, user_id).await
    }

    /// Applies a payment outcome to a pending booking.
    ///
    /// Success confirms the booking, stores the transaction id, and marks all
    /// lines purchased; failure cancels it. Settled bookings reject further
    /// outcomes with a conflict.
    ///
    /// # Returns
    /// - `Ok(Booking)` - The booking in its settled state
    /// - `Err(AppError::NotFound)` - Unknown or foreign booking id
    /// - `Err(AppError::Conflict)` - Booking is not pending
    pub async fn settle_payment(&self, param: SettlePaymentParam) -> Result<Booking, AppError> {
        let booking = self.find_owned(param.booking_id, param.user_id).await?;

        Self::ensure_pending(&booking)?;

        let target = if param.succeeded {
            BookingStatus::Confirmed
        } else {
            BookingStatus::Cancelled
        };

        let settled = BookingRepository::new(self.db)
            .settle(booking.id, target, param.transaction_id)
            .await?;

        tracing::info!(
            booking_id = settled.id,
            status = crate::server::model::booking::status_label(settled.status),
            "booking settled"
        );

        Ok(settled)
    }

    /// Cancels one of the user's pending bookings.
    ///
    /// Cancellation is a status flip; the rows remain.
    ///
    /// # Returns
    /// - `Ok(Booking)` - The cancelled booking
    /// - `Err(AppError::NotFound)` - Unknown or foreign booking id
    /// - `Err(AppError::Conflict)` - Booking is not pending
    pub async fn cancel(&self, booking_id: i32, user_id: i32) -> Result<Booking, AppError> {
        let booking = self.find_owned(booking_id, user_id).await?;

        Self::ensure_pending(&booking)?;

        Ok(BookingRepository::new(self.db)
            .settle(booking.id, BookingStatus::Cancelled, None)
            .await?)
    }

    async fn find_owned(&self, booking_id: i32, user_id: i32) -> Result<Booking, AppError> {
        let booking = BookingRepository::new(self.db)
            .find_by_id(booking_id)
            .await?
            .filter(|booking| booking.user_id == user_id);

        booking.ok_or_else(|| AppError::NotFound("Booking not found".to_string()))
    }

    fn ensure_pending(booking: &Booking) -> Result<(), AppError> {
        if booking.status != BookingStatus::Pending {
            return Err(AppError::Conflict("Booking is already settled".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::server::model::booking::CreateBookingLineParam;
    use entity::item_booking::PaymentMode;
    use sea_orm::PaginatorTrait;
    use test_utils::{builder::TestBuilder, factory};

    fn param(user_id: i32, item_id: i32, quantity: i32, amount: f64) -> CreateBookingParam {
        CreateBookingParam {
            user_id,
            amount,
            payment_mode: PaymentMode::Card,
            lines: vec![CreateBookingLineParam {
                item_id,
                quantity,
                start_date: None,
                end_date: None,
            }],
        }
    }

    /// Tests that checkout validation collects every violation.
    ///
    /// Expected: Err(Validation) listing quantity and amount problems, no rows written.
    #[tokio::test]
    async fn checkout_collects_validation_errors() {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::create_user(db).await.unwrap();
        let item = factory::create_item(db).await.unwrap();

        let result = BookingService::new(db)
            .checkout(param(user.id, item.id, 0, -5.0))
            .await;

        match result {
            Err(AppError::Validation { errors, .. }) => {
                assert_eq!(errors.len(), 2);
            }
            other => panic!("expected validation error, got {:?}", other.map(|b| b.id)),
        }

        let count = entity::prelude::ItemBooking::find().count(db).await.unwrap();
        assert_eq!(count, 0);
    }

    /// Tests that an empty cart is rejected.
    ///
    /// Expected: Err(Validation).
    #[tokio::test]
    async fn checkout_rejects_empty_cart() {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::create_user(db).await.unwrap();

        let result = BookingService::new(db)
            .checkout(CreateBookingParam {
                user_id: user.id,
                amount: 0.0,
                payment_mode: PaymentMode::Cash,
                lines: Vec::new(),
            })
            .await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    /// Tests the successful payment transition.
    ///
    /// Expected: pending -> confirmed with transaction id and purchased lines.
    #[tokio::test]
    async fn payment_success_confirms() {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::create_user(db).await.unwrap();
        let item = factory::create_item(db).await.unwrap();
        let service = BookingService::new(db);

        let booking = service.checkout(param(user.id, item.id, 1, 40.0)).await.unwrap();

        let settled = service
            .settle_payment(SettlePaymentParam {
                booking_id: booking.id,
                user_id: user.id,
                succeeded: true,
                transaction_id: Some("txn_77".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(settled.status, BookingStatus::Confirmed);
        assert_eq!(settled.transaction_id.as_deref(), Some("txn_77"));
        assert!(settled.lines.iter().all(|line| line.purchased));
    }

    /// Tests the failed payment transition.
    ///
    /// Expected: pending -> cancelled, lines unpurchased.
    #[tokio::test]
    async fn payment_failure_cancels() {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::create_user(db).await.unwrap();
        let item = factory::create_item(db).await.unwrap();
        let service = BookingService::new(db);

        let booking = service.checkout(param(user.id, item.id, 1, 40.0)).await.unwrap();

        let settled = service
            .settle_payment(SettlePaymentParam {
                booking_id: booking.id,
                user_id: user.id,
                succeeded: false,
                transaction_id: None,
            })
            .await
            .unwrap();

        assert_eq!(settled.status, BookingStatus::Cancelled);
        assert!(settled.lines.iter().all(|line| !line.purchased));
    }

    /// Tests that transitions are one-directional.
    ///
    /// Expected: a settled booking rejects further outcomes and cancellation.
    #[tokio::test]
    async fn settled_booking_rejects_transitions() {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::create_user(db).await.unwrap();
        let item = factory::create_item(db).await.unwrap();
        let service = BookingService::new(db);

        let booking = service.checkout(param(user.id, item.id, 1, 40.0)).await.unwrap();
        service
            .settle_payment(SettlePaymentParam {
                booking_id: booking.id,
                user_id: user.id,
                succeeded: true,
                transaction_id: Some("txn_1".to_string()),
            })
            .await
            .unwrap();

        let again = service
            .settle_payment(SettlePaymentParam {
                booking_id: booking.id,
                user_id: user.id,
                succeeded: false,
                transaction_id: None,
            })
            .await;
        assert!(matches!(again, Err(AppError::Conflict(_))));

        let cancel = service.cancel(booking.id, user.id).await;
        assert!(matches!(cancel, Err(AppError::Conflict(_))));
    }

    /// Tests that foreign bookings read as not found.
    ///
    /// Expected: Err(NotFound) for another user's booking id.
    #[tokio::test]
    async fn foreign_booking_is_not_found() {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let owner = factory::create_user(db).await.unwrap();
        let stranger = factory::create_user(db).await.unwrap();
        let item = factory::create_item(db).await.unwrap();
        let service = BookingService::new(db);

        let booking = service.checkout(param(owner.id, item.id, 1, 40.0)).await.unwrap();

        let get = service.get_for_user(booking.id, stranger.id).await;
        assert!(matches!(get, Err(AppError::NotFound(_))));

        let cancel = service.cancel(booking.id, stranger.id).await;
        assert!(matches!(cancel, Err(AppError::NotFound(_))));
    }

    /// Tests owner cancellation of a pending booking.
    ///
    /// Expected: Ok with status cancelled; the booking stays readable.
    #[tokio::test]
    async fn owner_can_cancel_pending() {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::create_user(db).await.unwrap();
        let item = factory::create_item(db).await.unwrap();
        let service = BookingService::new(db);

        let booking = service.checkout(param(user.id, item.id, 1, 40.0)).await.unwrap();
        let cancelled = service.cancel(booking.id, user.id).await.unwrap();

        assert_eq!(cancelled.status, BookingStatus::Cancelled);

        let fetched = service.get_for_user(booking.id, user.id).await.unwrap();
        assert_eq!(fetched.status, BookingStatus::Cancelled);
    }
}
