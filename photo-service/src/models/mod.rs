pub mod photo;
pub mod schema_info;
pub mod user;

pub use photo::{Comment, Photo};
pub use schema_info::SchemaInfo;
pub use user::User;

use mongodb::bson::oid::ObjectId;

/// Parses a path segment as a store identifier (24 hex characters).
pub fn parse_object_id(raw: &str) -> Option<ObjectId> {
    ObjectId::parse_str(raw).ok()
}
