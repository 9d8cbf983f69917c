use super::{format_timestamp, UserSummary};
use crate::models::{Comment, Photo};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommentResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub comment: String,
    pub date_time: String,
    /// Absent when the author no longer resolves to a stored user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhotoResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub file_name: String,
    pub date_time: String,
    pub user_id: String,
    pub comments: Vec<CommentResponse>,
}

impl CommentResponse {
    pub fn from_comment(comment: &Comment, authors: &HashMap<ObjectId, UserSummary>) -> Self {
        Self {
            id: comment.id.to_hex(),
            comment: comment.comment.clone(),
            date_time: format_timestamp(comment.date_time),
            user: authors.get(&comment.user_id).cloned(),
        }
    }
}

impl PhotoResponse {
    /// Expands each embedded comment with its author looked up in `authors`.
    pub fn from_photo(photo: &Photo, authors: &HashMap<ObjectId, UserSummary>) -> Self {
        Self {
            id: photo.id.to_hex(),
            file_name: photo.file_name.clone(),
            date_time: format_timestamp(photo.date_time),
            user_id: photo.user_id.to_hex(),
            comments: photo
                .comments
                .iter()
                .map(|c| CommentResponse::from_comment(c, authors))
                .collect(),
        }
    }
}
