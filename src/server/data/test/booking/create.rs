use super::*;

/// Tests creating a booking with its line items.
///
/// Verifies the header starts pending with no transaction id and that every
/// line is persisted unpurchased, in insertion order.
///
/// Expected: Ok with one header row and two line rows
#[tokio::test]
async fn creates_pending_booking_with_lines() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let item = factory::create_item(db).await?;

    let repo = BookingRepository::new(db);
    let booking = repo.create(checkout_param(user.id, item.id)).await?;

    assert_eq!(booking.user_id, user.id);
    assert_eq!(booking.status, BookingStatus::Pending);
    assert!(booking.transaction_id.is_none());
    assert_eq!(booking.amount, 120.0);
    assert_eq!(booking.lines.len(), 2);
    assert_eq!(booking.lines[0].quantity, 2);
    assert!(booking.lines.iter().all(|line| !line.purchased));

    let headers = entity::prelude::ItemBooking::find().count(db).await?;
    let lines = entity::prelude::BookingItem::find().count(db).await?;
    assert_eq!(headers, 1);
    assert_eq!(lines, 2);

    Ok(())
}

/// Tests that the optional date range survives the round trip.
///
/// Expected: stored dates equal the submitted ones, absent on the dateless line
#[tokio::test]
async fn persists_line_date_ranges() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let item = factory::create_item(db).await?;

    let repo = BookingRepository::new(db);
    let booking = repo.create(checkout_param(user.id, item.id)).await?;

    assert_eq!(booking.lines[0].start_date, NaiveDate::from_ymd_opt(2026, 9, 1));
    assert_eq!(booking.lines[0].end_date, NaiveDate::from_ymd_opt(2026, 9, 4));
    assert!(booking.lines[1].start_date.is_none());
    assert!(booking.lines[1].end_date.is_none());

    Ok(())
}
