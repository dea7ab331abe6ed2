use super::*;

/// Tests confirming a booking.
///
/// Expected: status confirmed, transaction id stored, all lines purchased
#[tokio::test]
async fn confirm_marks_lines_purchased() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let item = factory::create_item(db).await?;
    let booking = factory::create_booking(db, user.id, item.id).await?;

    let repo = BookingRepository::new(db);
    let settled = repo
        .settle(
            booking.id,
            BookingStatus::Confirmed,
            Some("txn_19ab".to_string()),
        )
        .await?;

    assert_eq!(settled.status, BookingStatus::Confirmed);
    assert_eq!(settled.transaction_id.as_deref(), Some("txn_19ab"));
    assert!(settled.lines.iter().all(|line| line.purchased));

    Ok(())
}

/// Tests cancelling a booking.
///
/// Expected: status cancelled, lines left unpurchased, row still present
#[tokio::test]
async fn cancel_is_a_status_flip() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let item = factory::create_item(db).await?;
    let booking = factory::create_booking(db, user.id, item.id).await?;

    let repo = BookingRepository::new(db);
    let settled = repo.settle(booking.id, BookingStatus::Cancelled, None).await?;

    assert_eq!(settled.status, BookingStatus::Cancelled);
    assert!(settled.transaction_id.is_none());
    assert!(settled.lines.iter().all(|line| !line.purchased));

    let headers = entity::prelude::ItemBooking::find().count(db).await?;
    assert_eq!(headers, 1);

    Ok(())
}
