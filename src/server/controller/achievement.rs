use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        achievement::UserAchievementsDto,
        api::{ErrorDto, ResponseDto},
    },
    server::{
        data::achievement::AchievementRepository, error::AppError, middleware::auth::AuthGuard,
        state::AppState,
    },
};

/// Tag for grouping achievement endpoints in OpenAPI documentation
pub static ACHIEVEMENT_TAG: &str = "achievement";

/// Read the caller's unlocked achievements.
///
/// Read-only: unlocks are written by an external updater.
///
/// # Access Control
/// - Authenticated user
///
/// # Returns
/// - `200 OK` - Per-user aggregate in the success envelope
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    get,
    path = "/api/achievements",
    tag = ACHIEVEMENT_TAG,
    responses(
        (status = 200, description = "Unlocked achievements", body = UserAchievementsDto),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_achievements(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let achievements = AchievementRepository::new(&state.db)
        .list_for_user(user.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ResponseDto::new(
            StatusCode::OK,
            achievements.into_dto(),
            "Achievements fetched",
        )),
    ))
}
