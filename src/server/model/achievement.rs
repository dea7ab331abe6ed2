//! Achievement domain models.
//!
//! Read-only in this application; rows are written by an external updater.

use chrono::{DateTime, Utc};

use crate::model::achievement::{AchievementDto, UserAchievementsDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Achievement {
    pub key: String,
    pub unlocked_at: DateTime<Utc>,
}

/// Per-user aggregate of unlocked achievements.
#[derive(Debug, Clone, PartialEq)]
pub struct UserAchievements {
    pub user_id: i32,
    pub entries: Vec<Achievement>,
}

impl UserAchievements {
    /// Aggregates entity rows into the per-user domain model.
    pub fn from_entities(user_id: i32, rows: Vec<entity::user_achievement::Model>) -> Self {
        Self {
            user_id,
            entries: rows
                .into_iter()
                .map(|row| Achievement {
                    key: row.achievement,
                    unlocked_at: row.unlocked_at,
                })
                .collect(),
        }
    }

    pub fn into_dto(self) -> UserAchievementsDto {
        UserAchievementsDto {
            user_id: self.user_id,
            achievements: self
                .entries
                .into_iter()
                .map(|entry| AchievementDto {
                    key: entry.key,
                    unlocked_at: entry.unlocked_at,
                })
                .collect(),
        }
    }
}
