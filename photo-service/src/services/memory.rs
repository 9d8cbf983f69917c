use super::store::{CollectionKind, PhotoStore};
use crate::models::{Photo, SchemaInfo, User};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use service_core::error::AppError;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

/// Vector-backed store for tests and local demos.
///
/// Iteration order is insertion order. Every trait call counts as one
/// query; [`InMemoryStore::set_failing`] makes every subsequent query error
/// the way an unreachable database would, [`InMemoryStore::fail_on`] does
/// the same for queries against a single collection.
#[derive(Default)]
pub struct InMemoryStore {
    users: Vec<User>,
    photos: Vec<Photo>,
    schema_infos: Vec<SchemaInfo>,
    queries: AtomicUsize,
    failing: AtomicBool,
    failing_collections: Mutex<HashSet<CollectionKind>>,
}

impl InMemoryStore {
    pub fn new(users: Vec<User>, photos: Vec<Photo>, schema_infos: Vec<SchemaInfo>) -> Self {
        Self {
            users,
            photos,
            schema_infos,
            ..Self::default()
        }
    }

    /// Number of store queries served so far.
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Makes queries against `collection` fail; the others keep answering.
    pub fn fail_on(&self, collection: CollectionKind) {
        self.failing_collections
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(collection);
    }

    fn begin_query(
        &self,
        operation: &str,
        collection: Option<CollectionKind>,
    ) -> Result<(), AppError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::DatabaseError(anyhow::anyhow!(
                "in-memory store unavailable during {}",
                operation
            )));
        }

        if let Some(collection) = collection {
            let failing = self
                .failing_collections
                .lock()
                .map_err(|e| anyhow::anyhow!("In-memory store mutex poisoned: {}", e))?
                .contains(&collection);
            if failing {
                return Err(AppError::DatabaseError(anyhow::anyhow!(
                    "in-memory {} collection unavailable during {}",
                    collection.collection_name(),
                    operation
                )));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl PhotoStore for InMemoryStore {
    async fn health_check(&self) -> Result<(), AppError> {
        self.begin_query("ping", None)
    }

    async fn find_schema_info(&self) -> Result<Vec<SchemaInfo>, AppError> {
        self.begin_query("find schemainfos", Some(CollectionKind::SchemaInfo))?;
        Ok(self.schema_infos.clone())
    }

    async fn count(&self, collection: CollectionKind) -> Result<u64, AppError> {
        self.begin_query("count", Some(collection))?;
        let count = match collection {
            CollectionKind::User => self.users.len(),
            CollectionKind::Photo => self.photos.len(),
            CollectionKind::SchemaInfo => self.schema_infos.len(),
        };
        Ok(count as u64)
    }

    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.begin_query("find users", Some(CollectionKind::User))?;
        Ok(self.users.clone())
    }

    async fn find_user(&self, id: ObjectId) -> Result<Option<User>, AppError> {
        self.begin_query("find user", Some(CollectionKind::User))?;
        Ok(self.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_photos_by_user(&self, user_id: ObjectId) -> Result<Vec<Photo>, AppError> {
        self.begin_query("find photos", Some(CollectionKind::Photo))?;
        Ok(self
            .photos
            .iter()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn find_users_by_ids(&self, ids: &[ObjectId]) -> Result<Vec<User>, AppError> {
        self.begin_query("find users by id", Some(CollectionKind::User))?;
        Ok(self
            .users
            .iter()
            .filter(|u| ids.contains(&u.id))
            .cloned()
            .collect())
    }
}
