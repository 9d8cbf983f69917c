use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// Singleton describing the loaded dataset, stored in `schemainfos`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SchemaInfo {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub version: String,
    pub load_date_time: Option<DateTime>,
}
