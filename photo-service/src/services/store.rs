use crate::models::{Photo, SchemaInfo, User};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use service_core::error::AppError;

/// The three collections the service reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    User,
    Photo,
    SchemaInfo,
}

impl CollectionKind {
    /// Collection name as created by the dataset loader.
    pub fn collection_name(self) -> &'static str {
        match self {
            CollectionKind::User => "users",
            CollectionKind::Photo => "photos",
            CollectionKind::SchemaInfo => "schemainfos",
        }
    }
}

/// Read-only access to the photo-sharing document store.
///
/// Handlers receive an `Arc<dyn PhotoStore>` through `AppState`, so the
/// MongoDB backend can be swapped for [`super::InMemoryStore`] in tests.
#[async_trait]
pub trait PhotoStore: Send + Sync {
    async fn health_check(&self) -> Result<(), AppError>;

    /// Every SchemaInfo record; exactly one is expected.
    async fn find_schema_info(&self) -> Result<Vec<SchemaInfo>, AppError>;

    async fn count(&self, collection: CollectionKind) -> Result<u64, AppError>;

    /// All users in store iteration order.
    async fn list_users(&self) -> Result<Vec<User>, AppError>;

    async fn find_user(&self, id: ObjectId) -> Result<Option<User>, AppError>;

    /// Photos owned by `user_id`, in store iteration order.
    async fn find_photos_by_user(&self, user_id: ObjectId) -> Result<Vec<Photo>, AppError>;

    /// Users whose id is in `ids`, fetched in a single round trip.
    async fn find_users_by_ids(&self, ids: &[ObjectId]) -> Result<Vec<User>, AppError>;
}
