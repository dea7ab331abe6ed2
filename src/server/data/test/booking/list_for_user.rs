use super::*;

/// Tests listing bookings for one user only.
///
/// Expected: the owner's two bookings with their lines, the other user's none
#[tokio::test]
async fn lists_only_own_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let item = factory::create_item(db).await?;

    let first = factory::create_booking(db, owner.id, item.id).await?;
    let second = factory::create_booking(db, owner.id, item.id).await?;
    factory::create_booking(db, other.id, item.id).await?;

    let repo = BookingRepository::new(db);
    let bookings = repo.list_for_user(owner.id).await?;

    assert_eq!(bookings.len(), 2);
    let ids: Vec<i32> = bookings.iter().map(|b| b.id).collect();
    assert!(ids.contains(&first.id));
    assert!(ids.contains(&second.id));
    assert!(bookings.iter().all(|b| b.user_id == owner.id));
    assert!(bookings.iter().all(|b| b.lines.len() == 1));

    Ok(())
}

/// Tests finding a single booking by id.
///
/// Expected: Ok(Some) with lines for a stored id, Ok(None) otherwise
#[tokio::test]
async fn finds_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let item = factory::create_item(db).await?;
    let stored = factory::create_booking(db, user.id, item.id).await?;

    let repo = BookingRepository::new(db);

    let found = repo.find_by_id(stored.id).await?.unwrap();
    assert_eq!(found.id, stored.id);
    assert_eq!(found.lines.len(), 1);

    let missing = repo.find_by_id(stored.id + 1000).await?;
    assert!(missing.is_none());

    Ok(())
}
