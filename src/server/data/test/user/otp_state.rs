use super::*;

/// Tests rotating a user's outstanding OTP.
///
/// Expected: new code and expiry stored, replacing the old ones
#[tokio::test]
async fn set_otp_replaces_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .otp("111111", Utc::now() + Duration::minutes(1))
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let expires_at = Utc::now() + Duration::minutes(10);
    repo.set_otp(SetOtpParam {
        user_id: user.id,
        otp_code: "222222".to_string(),
        otp_expires_at: expires_at,
    })
    .await?;

    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(stored.otp_code.as_deref(), Some("222222"));
    assert_eq!(stored.otp_expires_at, Some(expires_at));

    Ok(())
}

/// Tests verifying a user.
///
/// Expected: verified flag set and OTP state cleared
#[tokio::test]
async fn mark_verified_clears_otp() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .otp("333333", Utc::now() + Duration::minutes(10))
        .build()
        .await?;

    let repo = UserRepository::new(db);
    repo.mark_verified(user.id).await?;

    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert!(stored.verified);
    assert!(stored.otp_code.is_none());
    assert!(stored.otp_expires_at.is_none());

    Ok(())
}
