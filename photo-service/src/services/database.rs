use super::store::{CollectionKind, PhotoStore};
use crate::models::{Photo, SchemaInfo, User};
use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    Client as MongoClient, Collection, Database,
};
use service_core::error::AppError;

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB at {}: {}", uri, e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    pub fn users(&self) -> Collection<User> {
        self.db.collection(CollectionKind::User.collection_name())
    }

    pub fn photos(&self) -> Collection<Photo> {
        self.db.collection(CollectionKind::Photo.collection_name())
    }

    pub fn schema_infos(&self) -> Collection<SchemaInfo> {
        self.db
            .collection(CollectionKind::SchemaInfo.collection_name())
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

async fn find_all<T>(collection: Collection<T>, filter: Document) -> Result<Vec<T>, AppError>
where
    T: serde::de::DeserializeOwned + Unpin + Send + Sync,
{
    let cursor = collection.find(filter, None).await?;
    let records: Vec<T> = cursor.try_collect().await?;
    Ok(records)
}

#[async_trait]
impl PhotoStore for MongoDb {
    async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    async fn find_schema_info(&self) -> Result<Vec<SchemaInfo>, AppError> {
        find_all(self.schema_infos(), doc! {}).await
    }

    async fn count(&self, collection: CollectionKind) -> Result<u64, AppError> {
        let count = self
            .db
            .collection::<Document>(collection.collection_name())
            .count_documents(doc! {}, None)
            .await?;
        Ok(count)
    }

    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        find_all(self.users(), doc! {}).await
    }

    async fn find_user(&self, id: ObjectId) -> Result<Option<User>, AppError> {
        Ok(self.users().find_one(doc! { "_id": id }, None).await?)
    }

    async fn find_photos_by_user(&self, user_id: ObjectId) -> Result<Vec<Photo>, AppError> {
        find_all(self.photos(), doc! { "user_id": user_id }).await
    }

    async fn find_users_by_ids(&self, ids: &[ObjectId]) -> Result<Vec<User>, AppError> {
        find_all(self.users(), doc! { "_id": { "$in": ids.to_vec() } }).await
    }
}
