use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// A comment embedded in its photo document; it has no collection of its own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub comment: String,
    pub date_time: DateTime,
    pub user_id: ObjectId,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Photo {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub file_name: String,
    pub date_time: DateTime,
    pub user_id: ObjectId,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Photo {
    /// Authors of this photo's comments, in comment order, duplicates included.
    pub fn commenter_ids(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.comments.iter().map(|c| c.user_id)
    }
}
