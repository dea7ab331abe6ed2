use super::*;

/// Tests creating a new password-based user.
///
/// Verifies the record comes back unverified with its OTP state set and the
/// stored email untouched (normalization is the service layer's job).
///
/// Expected: Ok with one user row present
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(create_param("trekker@example.com")).await.unwrap();

    assert_eq!(user.email, "trekker@example.com");
    assert!(!user.verified);
    assert_eq!(user.otp_code.as_deref(), Some("123456"));
    assert!(user.password_hash.is_some());

    let count = entity::prelude::User::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that a duplicate email is rejected by the unique index.
///
/// Verifies the second insert surfaces as a conflict and leaves the user
/// count unchanged.
///
/// Expected: Err(Conflict) with exactly one row remaining
#[tokio::test]
async fn duplicate_email_conflicts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(create_param("trekker@example.com")).await.unwrap();

    let result = repo.create(create_param("trekker@example.com")).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    let count = entity::prelude::User::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests creating a webhook-delivered external identity.
///
/// Verifies the record is verified, password-less, and carries the provider id.
///
/// Expected: Ok with external identity fields stored
#[tokio::test]
async fn creates_external_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create_external(crate::server::model::user::CreateExternalUserParam {
            external_id: "prov_8731".to_string(),
            email: "alex.rivers@example.com".to_string(),
            name: "Alex Rivers".to_string(),
        })
        .await
        .unwrap();

    assert!(user.verified);
    assert!(user.password_hash.is_none());
    assert_eq!(user.external_id.as_deref(), Some("prov_8731"));

    Ok(())
}

/// Tests that an external identity also conflicts on a taken email.
///
/// Expected: Err(Conflict) with the original row unchanged
#[tokio::test]
async fn external_duplicate_email_conflicts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("taken@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create_external(crate::server::model::user::CreateExternalUserParam {
            external_id: "prov_1".to_string(),
            email: "taken@example.com".to_string(),
            name: "Someone Else".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    let count = entity::prelude::User::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
