mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::{get, router_with, seeded_store};
use service_core::middleware::REQUEST_ID_HEADER;
use std::path::PathBuf;
use tower::util::ServiceExt;
use uuid::Uuid;

struct StaticDir(PathBuf);

impl StaticDir {
    fn new() -> Self {
        let root = std::env::temp_dir().join(format!("photo-static-{}", Uuid::new_v4()));
        std::fs::create_dir_all(root.join("images")).unwrap();
        std::fs::write(root.join("photo-share.html"), "<html>photos</html>").unwrap();
        std::fs::write(root.join("images").join("ouster.jpg"), [0xFF, 0xD8, 0xFF]).unwrap();
        Self(root)
    }
}

impl Drop for StaticDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.0);
    }
}

#[tokio::test]
async fn serves_files_with_inferred_content_type() {
    let dir = StaticDir::new();
    let response = router_with(seeded_store(), &dir.0)
        .oneshot(
            Request::builder()
                .uri("/photo-share.html")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"<html>photos</html>");
}

#[tokio::test]
async fn serves_nested_files_verbatim() {
    let dir = StaticDir::new();
    let (status, body) = get(router_with(seeded_store(), &dir.0), "/images/ouster.jpg").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, vec![0xFF, 0xD8, 0xFF]);
}

#[tokio::test]
async fn missing_file_is_not_found() {
    let dir = StaticDir::new();
    let store = seeded_store();
    let (status, _) = get(router_with(store.clone(), &dir.0), "/images/missing.jpg").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(store.query_count(), 0);
}

#[tokio::test]
async fn traversal_outside_root_is_refused() {
    let dir = StaticDir::new();
    let (status, _) = get(router_with(seeded_store(), &dir.0), "/../etc/passwd").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn responses_carry_request_id() {
    let dir = StaticDir::new();
    let response = router_with(seeded_store(), &dir.0)
        .oneshot(
            Request::builder()
                .uri("/photo-share.html")
                .header(REQUEST_ID_HEADER, "req-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers()[REQUEST_ID_HEADER], "req-42");
}
