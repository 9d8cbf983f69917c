use super::format_timestamp;
use crate::models::SchemaInfo;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SchemaInfoResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_date_time: Option<String>,
}

impl From<SchemaInfo> for SchemaInfoResponse {
    fn from(info: SchemaInfo) -> Self {
        Self {
            id: info.id.to_hex(),
            version: info.version,
            load_date_time: info.load_date_time.map(format_timestamp),
        }
    }
}

/// Record counts per collection, keyed the way the diagnostics page reads them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CollectionCounts {
    pub user: u64,
    pub photo: u64,
    #[serde(rename = "schemaInfo")]
    pub schema_info: u64,
}
