//! Achievement factory for creating unlocked achievement rows.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an unlocked achievement row for a user.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Owning user id
/// - `key` - Achievement key, e.g. `"first_summit"`
pub async fn create_achievement(
    db: &DatabaseConnection,
    user_id: i32,
    key: impl Into<String>,
) -> Result<entity::user_achievement::Model, DbErr> {
    entity::user_achievement::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        achievement: ActiveValue::Set(key.into()),
        unlocked_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
