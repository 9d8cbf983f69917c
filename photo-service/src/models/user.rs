use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A member of the photo-sharing site, stored in the `users` collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub occupation: String,
}
