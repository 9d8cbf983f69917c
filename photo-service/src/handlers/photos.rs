use crate::dtos::{PhotoResponse, UserSummary};
use crate::models::{parse_object_id, Photo};
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use mongodb::bson::oid::ObjectId;
use service_core::error::AppError;
use std::collections::{HashMap, HashSet};

/// `GET /photosOfUser/:id`: the user's photos with comment authors expanded.
///
/// Two sequential round trips: the photos, then every distinct commenter
/// in one batched lookup.
pub async fn photos_of_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<PhotoResponse>>, AppError> {
    let user_id = parse_object_id(&id)
        .ok_or_else(|| AppError::bad_request(format!("Invalid user id {}", id)))?;

    let photos = state.store.find_photos_by_user(user_id).await?;
    if photos.is_empty() {
        tracing::info!(user_id = %id, "No photos for user");
        return Err(AppError::bad_request("Photos not found"));
    }

    let commenter_ids = distinct_commenters(&photos);
    let authors: HashMap<ObjectId, UserSummary> = if commenter_ids.is_empty() {
        HashMap::new()
    } else {
        let users = state.store.find_users_by_ids(&commenter_ids).await?;
        if users.is_empty() {
            return Err(AppError::internal("Missing comment authors"));
        }
        users.iter().map(|u| (u.id, UserSummary::from(u))).collect()
    };

    let unresolved = commenter_ids
        .iter()
        .filter(|id| !authors.contains_key(*id))
        .count();
    if unresolved > 0 {
        tracing::warn!(user_id = %id, unresolved, "Comment authors missing from users");
    }

    Ok(Json(
        photos
            .iter()
            .map(|p| PhotoResponse::from_photo(p, &authors))
            .collect(),
    ))
}

/// Commenter ids across `photos`, deduplicated in first-seen order.
pub fn distinct_commenters(photos: &[Photo]) -> Vec<ObjectId> {
    let mut seen = HashSet::new();
    photos
        .iter()
        .flat_map(Photo::commenter_ids)
        .filter(|id| seen.insert(*id))
        .collect()
}
