use super::*;

/// Tests the empty aggregate for a user with no unlocks.
///
/// Expected: Ok with an empty entry list
#[tokio::test]
async fn empty_aggregate_for_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::UserAchievement)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let aggregate = AchievementRepository::new(db).list_for_user(user.id).await?;

    assert_eq!(aggregate.user_id, user.id);
    assert!(aggregate.entries.is_empty());

    Ok(())
}

/// Tests aggregating unlocked achievements per user.
///
/// Expected: only the owner's rows, with their keys intact
#[tokio::test]
async fn aggregates_only_own_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::UserAchievement)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    factory::create_achievement(db, owner.id, "first_summit").await?;
    factory::create_achievement(db, owner.id, "night_hike").await?;
    factory::create_achievement(db, other.id, "river_crossing").await?;

    let aggregate = AchievementRepository::new(db).list_for_user(owner.id).await?;

    assert_eq!(aggregate.entries.len(), 2);
    let keys: Vec<&str> = aggregate.entries.iter().map(|e| e.key.as_str()).collect();
    assert!(keys.contains(&"first_summit"));
    assert!(keys.contains(&"night_hike"));
    assert!(!keys.contains(&"river_crossing"));

    Ok(())
}
