use super::*;

/// Tests replacing a user's password hash.
///
/// Expected: new hash stored and any outstanding OTP cleared
#[tokio::test]
async fn replaces_hash_and_clears_otp() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .otp("444444", Utc::now() + Duration::minutes(10))
        .build()
        .await?;

    let repo = UserRepository::new(db);
    repo.update_password(UpdatePasswordParam {
        user_id: user.id,
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$bmV3c2FsdA$replacement".to_string(),
    })
    .await?;

    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(
        stored.password_hash.as_deref(),
        Some("$argon2id$v=19$m=19456,t=2,p=1$bmV3c2FsdA$replacement")
    );
    assert!(stored.otp_code.is_none());
    assert!(stored.otp_expires_at.is_none());

    Ok(())
}
