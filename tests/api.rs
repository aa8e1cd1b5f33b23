//! Black-box tests for the photo API, driving the real router in-process
//! against the demo store.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::util::ServiceExt;

use gallery_api::catalog::{CatalogStore, DEMO_PHOTO_COUNT};
use gallery_api::http::router;

fn demo_app() -> Router {
    router(CatalogStore::demo())
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_list_returns_seeded_catalog() {
    let (status, body) = send(demo_app(), get("/api/photos")).await;

    assert_eq!(status, StatusCode::OK);
    let photos = body.as_array().unwrap();
    assert_eq!(photos.len(), DEMO_PHOTO_COUNT);
    for photo in photos {
        assert!(!photo["title"].as_str().unwrap().is_empty());
        assert!(!photo["image_url"].as_str().unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_get_photo_by_id() {
    let (status, body) = send(demo_app(), get("/api/photos/1")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    assert_eq!(body["title"], "Amazing Photo 1");
    assert_eq!(body["file_name"], "photo_1.jpg");
}

#[tokio::test]
async fn test_get_unknown_photo_is_404() {
    let (status, body) = send(demo_app(), get("/api/photos/999999")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Photo not found");
}

#[tokio::test]
async fn test_get_non_numeric_id_is_404() {
    // Unparseable ids are treated as "no match", not a parse rejection.
    let (status, body) = send(demo_app(), get("/api/photos/abc")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Photo not found");
}

#[tokio::test]
async fn test_create_photo_with_defaults() {
    let app = demo_app();
    let request = post_json(
        "/api/photos",
        json!({"title": "T", "image_url": "http://x/y.jpg"}),
    );
    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], DEMO_PHOTO_COUNT as i64 + 1);
    assert_eq!(body["title"], "T");
    assert_eq!(body["image_url"], "http://x/y.jpg");
    assert_eq!(body["description"], "");
    assert_eq!(body["file_name"], "");
    assert_eq!(body["file_size_kb"], 0);
    assert!(body["created_at"].as_str().is_some());
    assert!(body["updated_at"].as_str().is_some());
}

#[tokio::test]
async fn test_create_then_listed_first() {
    let store = CatalogStore::demo();
    let app = router(store);

    let request = post_json(
        "/api/photos",
        json!({"title": "Newest", "image_url": "http://x/new.jpg"}),
    );
    let (status, created) = send(app.clone(), request).await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = send(app, get("/api/photos")).await;
    let photos = body.as_array().unwrap();
    assert_eq!(photos.len(), DEMO_PHOTO_COUNT + 1);
    assert_eq!(photos[0]["id"], created["id"]);
}

#[tokio::test]
async fn test_create_missing_required_fields_is_400() {
    let store = CatalogStore::demo();
    let app = router(store);

    for body in [
        json!({"image_url": "http://x/y.jpg"}),
        json!({"title": "T"}),
        json!({"title": "", "image_url": "http://x/y.jpg"}),
        json!({"title": "T", "image_url": ""}),
    ] {
        let (status, response) = send(app.clone(), post_json("/api/photos", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response["error"], "Title and image_url are required");
    }

    // No store mutation happened for any rejected request.
    let (_, body) = send(app, get("/api/photos")).await;
    assert_eq!(body.as_array().unwrap().len(), DEMO_PHOTO_COUNT);
}

#[tokio::test]
async fn test_delete_photo() {
    let store = CatalogStore::demo();
    let app = router(store);

    let (status, body) = send(app.clone(), delete("/api/photos/7")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Photo deleted successfully");
    assert_eq!(body["id"], 7);

    // Delete followed by Get on the same id yields not-found.
    let (status, _) = send(app, get("/api/photos/7")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_nonexistent_is_404() {
    let (status, body) = send(demo_app(), delete("/api/photos/999999")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Photo not found");
}

#[tokio::test]
async fn test_health_reports_demo_mode() {
    let (status, body) = send(demo_app(), get("/api/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "demo mode");
    assert_eq!(body["list_fallbacks"], 0);
    assert!(body["timestamp"].as_str().is_some());
}

#[tokio::test]
async fn test_root_lists_endpoints() {
    let (status, body) = send(demo_app(), get("/")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().unwrap().contains("Photo API"));
    assert_eq!(body["endpoints"]["GET /api/photos"], "Get all photos");
    assert_eq!(body["endpoints"]["GET /api/health"], "Health check");
}
