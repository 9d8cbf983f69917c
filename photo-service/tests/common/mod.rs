#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use mongodb::bson::{oid::ObjectId, DateTime};
use photo_service::models::{Comment, Photo, SchemaInfo, User};
use photo_service::services::{InMemoryStore, PhotoStore};
use photo_service::startup::{build_router, AppState};
use std::path::PathBuf;
use std::sync::Arc;
use tower::util::ServiceExt;

pub const IAN_ID: &str = "57231f1a30e4351f4e9f4bd7";
pub const ELLEN_ID: &str = "57231f1a30e4351f4e9f4bd8";
pub const PEREGRIN_ID: &str = "57231f1a30e4351f4e9f4bd9";
pub const REY_ID: &str = "57231f1a30e4351f4e9f4bda";
/// Referenced by comments but never stored.
pub const GHOST_ID: &str = "57231f1a30e4351f4e9f4bff";
pub const UNKNOWN_ID: &str = "000000000000000000000000";

pub fn oid(hex: &str) -> ObjectId {
    ObjectId::parse_str(hex).expect("fixture id must be valid")
}

fn user(id: &str, first: &str, last: &str, location: &str, occupation: &str) -> User {
    User {
        id: oid(id),
        first_name: first.to_string(),
        last_name: last.to_string(),
        location: location.to_string(),
        description: format!("{} {} test profile", first, last),
        occupation: occupation.to_string(),
    }
}

fn comment(id: &str, text: &str, millis: i64, author: &str) -> Comment {
    Comment {
        id: oid(id),
        comment: text.to_string(),
        date_time: DateTime::from_millis(millis),
        user_id: oid(author),
    }
}

pub fn users() -> Vec<User> {
    vec![
        user(IAN_ID, "Ian", "Malcolm", "Austin, TX", "Mathematician"),
        user(ELLEN_ID, "Ellen", "Ripley", "Nostromo", "Warrant Officer"),
        user(PEREGRIN_ID, "Peregrin", "Took", "Gondor", "Thain"),
        user(REY_ID, "Rey", "Kenobi", "D'Qar", "Rebel"),
    ]
}

pub fn photos() -> Vec<Photo> {
    vec![
        Photo {
            id: oid("57231f1a30e4351f4e9f4c01"),
            file_name: "malcolm2.jpg".to_string(),
            date_time: DateTime::from_millis(1_356_998_400_000),
            user_id: oid(IAN_ID),
            comments: vec![
                comment(
                    "57231f1a30e4351f4e9f4d01",
                    "Life finds a way.",
                    1_357_000_000_000,
                    IAN_ID,
                ),
                comment(
                    "57231f1a30e4351f4e9f4d02",
                    "Not on my ship.",
                    1_357_000_100_000,
                    ELLEN_ID,
                ),
            ],
        },
        Photo {
            id: oid("57231f1a30e4351f4e9f4c02"),
            file_name: "malcolm1.jpg".to_string(),
            date_time: DateTime::from_millis(1_356_000_000_000),
            user_id: oid(IAN_ID),
            comments: vec![],
        },
        Photo {
            id: oid("57231f1a30e4351f4e9f4c03"),
            file_name: "ripley1.jpg".to_string(),
            date_time: DateTime::from_millis(1_356_500_000_000),
            user_id: oid(ELLEN_ID),
            comments: vec![
                comment(
                    "57231f1a30e4351f4e9f4d03",
                    "Clever girl.",
                    1_357_100_000_000,
                    IAN_ID,
                ),
                comment(
                    "57231f1a30e4351f4e9f4d04",
                    "Who wrote this?",
                    1_357_200_000_000,
                    GHOST_ID,
                ),
            ],
        },
        Photo {
            id: oid("57231f1a30e4351f4e9f4c04"),
            file_name: "kenobi1.jpg".to_string(),
            date_time: DateTime::from_millis(1_356_600_000_000),
            user_id: oid(REY_ID),
            comments: vec![comment(
                "57231f1a30e4351f4e9f4d05",
                "Only ghosts here.",
                1_357_300_000_000,
                GHOST_ID,
            )],
        },
    ]
}

pub fn schema_info() -> SchemaInfo {
    SchemaInfo {
        id: oid("57231f1a30e4351f4e9f4e01"),
        version: "1.0".to_string(),
        load_date_time: Some(DateTime::from_millis(1_356_998_400_000)),
    }
}

pub fn seeded_store() -> Arc<InMemoryStore> {
    Arc::new(InMemoryStore::new(users(), photos(), vec![schema_info()]))
}

pub fn router_with(store: Arc<InMemoryStore>, static_root: impl Into<PathBuf>) -> Router {
    let store: Arc<dyn PhotoStore> = store;
    build_router(AppState::new(store, static_root))
}

pub fn router(store: Arc<InMemoryStore>) -> Router {
    router_with(store, std::env::temp_dir())
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, bytes) = get(app, uri).await;
    let body = serde_json::from_slice(&bytes)
        .unwrap_or_else(|e| panic!("{} did not return JSON: {}", uri, e));
    (status, body)
}
