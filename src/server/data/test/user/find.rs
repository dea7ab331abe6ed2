use super::*;

/// Tests looking up a user by email.
///
/// Expected: Ok(Some) for a stored email, Ok(None) otherwise
#[tokio::test]
async fn finds_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::user::UserFactory::new(db)
        .email("guide@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    let found = repo.find_by_email("guide@example.com").await?;
    assert_eq!(found.map(|u| u.id), Some(stored.id));

    let missing = repo.find_by_email("nobody@example.com").await?;
    assert!(missing.is_none());

    Ok(())
}

/// Tests looking up a user by primary key.
///
/// Expected: Ok(Some) for a stored id, Ok(None) otherwise
#[tokio::test]
async fn finds_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_user(db).await?;

    let repo = UserRepository::new(db);

    let found = repo.find_by_id(stored.id).await?;
    assert_eq!(found.map(|u| u.email), Some(stored.email));

    let missing = repo.find_by_id(stored.id + 1000).await?;
    assert!(missing.is_none());

    Ok(())
}
