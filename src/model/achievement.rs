use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AchievementDto {
    pub key: String,
    pub unlocked_at: DateTime<Utc>,
}

/// Per-user aggregate of unlocked achievements.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserAchievementsDto {
    pub user_id: i32,
    pub achievements: Vec<AchievementDto>,
}
