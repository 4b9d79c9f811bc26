//! Router-level tests against the in-memory store.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use product_api::{app, AppState, MemoryProductStore, PgProductStore, ServerConfig};
use sqlx::postgres::PgConnectOptions;
use serde_json::{json, Value};
use tower::ServiceExt;

// ──────────────────────── Helpers ────────────────────────

fn test_app() -> Router {
    app(AppState::new(MemoryProductStore::new()), &ServerConfig::default())
}

/// Router over a PostgreSQL store pointed at a port nothing listens on.
fn unreachable_db_app() -> Router {
    let options = PgConnectOptions::new()
        .host("127.0.0.1")
        .port(1)
        .username("postgres")
        .database("products");
    app(AppState::new(PgProductStore::new(options)), &ServerConfig::default())
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            req = req.header(header::CONTENT_TYPE, "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };
    let res = app.clone().oneshot(req.body(body).unwrap()).await.unwrap();
    let status = res.status();
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

async fn create(app: &Router, name: &str, price: f64) -> i64 {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/products",
        Some(json!({"name": name, "price": price, "image_url": format!("https://example.com/{}.jpg", name)})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().unwrap()
}

// ══════════════════════════════════════════════════════════
//  create / read
// ══════════════════════════════════════════════════════════

#[tokio::test]
async fn create_then_fetch_returns_matching_fields() {
    let app = test_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/products",
        Some(json!({"name": "Desk Lamp", "price": 49.99, "image_url": "https://example.com/lamp.jpg"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Product added successfully");
    let id = body["id"].as_i64().unwrap();

    let (status, product) = send(&app, Method::GET, &format!("/api/products/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(product["id"], id);
    assert_eq!(product["name"], "Desk Lamp");
    assert_eq!(product["price"], 49.99);
    assert_eq!(product["image_url"], "https://example.com/lamp.jpg");
}

#[tokio::test]
async fn create_without_image_url_stores_null() {
    let app = test_app();
    let (status, body) = send(&app, Method::POST, "/api/products", Some(json!({"name": "Mug", "price": 5}))).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["id"].as_i64().unwrap();
    let (_, product) = send(&app, Method::GET, &format!("/api/products/{}", id), None).await;
    assert_eq!(product["image_url"], Value::Null);
}

#[tokio::test]
async fn create_without_name_returns_400() {
    let app = test_app();
    let (status, body) = send(&app, Method::POST, "/api/products", Some(json!({"price": 10}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "validation_error");

    let (_, list) = send(&app, Method::GET, "/api/products", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn create_without_price_returns_400() {
    let app = test_app();
    let (status, _) = send(&app, Method::POST, "/api/products", Some(json!({"name": "Mug"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_with_negative_price_returns_400() {
    let app = test_app();
    let (status, _) = send(&app, Method::POST, "/api/products", Some(json!({"name": "Mug", "price": -3}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_with_non_object_body_returns_400() {
    let app = test_app();
    let (status, body) = send(&app, Method::POST, "/api/products", Some(json!(["Mug", 3]))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "bad_request");
}

#[tokio::test]
async fn create_with_price_beyond_column_returns_400() {
    let app = test_app();
    let (status, body) = send(&app, Method::POST, "/api/products", Some(json!({"name": "a", "price": 1e12}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "validation_error");

    let (_, list) = send(&app, Method::GET, "/api/products", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn fetch_missing_product_returns_404() {
    let app = test_app();
    let (status, body) = send(&app, Method::GET, "/api/products/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test]
async fn non_integer_id_returns_400() {
    let app = test_app();
    let (status, _) = send(&app, Method::GET, "/api/products/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn out_of_range_id_returns_404() {
    let app = test_app();
    let (status, body) = send(&app, Method::GET, "/api/products/99999999999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "not_found");

    let (status, _) = send(&app, Method::DELETE, "/api/products/99999999999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ══════════════════════════════════════════════════════════
//  list
// ══════════════════════════════════════════════════════════

#[tokio::test]
async fn list_returns_newest_first() {
    let app = test_app();
    let a = create(&app, "a", 1.0).await;
    let b = create(&app, "b", 2.0).await;
    let c = create(&app, "c", 3.0).await;

    let (status, list) = send(&app, Method::GET, "/api/products", None).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![c, b, a]);
}

// ══════════════════════════════════════════════════════════
//  update
// ══════════════════════════════════════════════════════════

#[tokio::test]
async fn update_replaces_all_mutable_fields() {
    let app = test_app();
    let id = create(&app, "Chair", 80.0).await;

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/products/{}", id),
        Some(json!({"name": "Armchair", "price": 120.5})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Product updated successfully");

    let (_, product) = send(&app, Method::GET, &format!("/api/products/{}", id), None).await;
    assert_eq!(product["name"], "Armchair");
    assert_eq!(product["price"], 120.5);
    assert_eq!(product["image_url"], Value::Null);
}

#[tokio::test]
async fn update_missing_product_returns_404_and_leaves_table_unchanged() {
    let app = test_app();
    create(&app, "Chair", 80.0).await;
    let (_, before) = send(&app, Method::GET, "/api/products", None).await;

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/products/12345",
        Some(json!({"name": "Ghost", "price": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, after) = send(&app, Method::GET, "/api/products", None).await;
    assert_eq!(before, after);
}

#[tokio::test]
async fn update_with_invalid_payload_returns_400() {
    let app = test_app();
    let id = create(&app, "Chair", 80.0).await;
    let (status, _) = send(&app, Method::PUT, &format!("/api/products/{}", id), Some(json!({"price": 1}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ══════════════════════════════════════════════════════════
//  delete
// ══════════════════════════════════════════════════════════

#[tokio::test]
async fn delete_removes_product() {
    let app = test_app();
    let id = create(&app, "Chair", 80.0).await;

    let (status, body) = send(&app, Method::DELETE, &format!("/api/products/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Product deleted successfully");

    let (status, _) = send(&app, Method::GET, &format!("/api/products/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_missing_product_returns_404() {
    let app = test_app();
    let (status, _) = send(&app, Method::DELETE, "/api/products/77", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ══════════════════════════════════════════════════════════
//  common routes
// ══════════════════════════════════════════════════════════

#[tokio::test]
async fn health_and_ready_report_ok() {
    let app = test_app();
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = send(&app, Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "ok");
}

#[tokio::test]
async fn openapi_document_lists_product_paths() {
    let app = test_app();
    let (status, doc) = send(&app, Method::GET, "/api/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/api/products"].is_object());
    assert!(doc["paths"]["/api/products/{id}"].is_object());
}

// ══════════════════════════════════════════════════════════
//  database failures
// ══════════════════════════════════════════════════════════

#[tokio::test]
async fn list_with_unreachable_database_returns_500_with_driver_details() {
    let app = unreachable_db_app();
    let (status, body) = send(&app, Method::GET, "/api/products", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "database_error");
    assert_eq!(body["error"]["message"], "database connection failed");
    let details = body["error"]["details"].as_str().unwrap();
    assert!(!details.is_empty());
}

#[tokio::test]
async fn writes_with_unreachable_database_return_500() {
    let app = unreachable_db_app();
    let (status, body) = send(&app, Method::POST, "/api/products", Some(json!({"name": "Mug", "price": 5}))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "database_error");

    let (status, _) = send(&app, Method::DELETE, "/api/products/1", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn validation_runs_before_the_database_is_contacted() {
    let app = unreachable_db_app();
    let (status, _) = send(&app, Method::POST, "/api/products", Some(json!({"price": 5}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn ready_with_unreachable_database_returns_503() {
    let app = unreachable_db_app();
    let (status, body) = send(&app, Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["database"], "unavailable");

    let (status, _) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
}
