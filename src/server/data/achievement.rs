//! Achievement data repository.
//!
//! Read-only: rows are written by an external updater collaborator, this
//! application only aggregates them per user.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::achievement::UserAchievements;

/// Repository providing read access to unlocked achievements.
pub struct AchievementRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AchievementRepository<'a> {
    /// Creates a new AchievementRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Aggregates a user's unlocked achievements, oldest first.
    ///
    /// # Returns
    /// - `Ok(UserAchievements)` - The aggregate (empty when nothing is unlocked)
    /// - `Err(DbErr)` - Database error during query
    pub async fn list_for_user(&self, user_id: i32) -> Result<UserAchievements, DbErr> {
        let rows = entity::prelude::UserAchievement::find()
            .filter(entity::user_achievement::Column::UserId.eq(user_id))
            .order_by_asc(entity::user_achievement::Column::UnlockedAt)
            .all(self.db)
            .await?;

        Ok(UserAchievements::from_entities(user_id, rows))
    }
}
