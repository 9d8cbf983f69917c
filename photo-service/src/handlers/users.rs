use crate::dtos::{UserProfile, UserSummary};
use crate::models::parse_object_id;
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use service_core::error::AppError;

/// `GET /user/list`: every user reduced to id and name.
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserSummary>>, AppError> {
    let users = state.store.list_users().await?;
    if users.is_empty() {
        return Err(AppError::internal("Missing Users Info"));
    }

    Ok(Json(users.iter().map(UserSummary::from).collect()))
}

/// `GET /user/:id`: the full profile of one user.
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserProfile>, AppError> {
    let user_id = parse_object_id(&id)
        .ok_or_else(|| AppError::bad_request(format!("Invalid user id {}", id)))?;

    let user = state
        .store
        .find_user(user_id)
        .await?
        .ok_or_else(|| {
            tracing::info!(user_id = %id, "User not found");
            AppError::bad_request("User not found")
        })?;

    Ok(Json(UserProfile::from(user)))
}
