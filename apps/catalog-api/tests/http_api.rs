//! End-to-end tests of the `/produtos` routes against an in-memory store.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use catalog_api::error::NUMERIC_ID_EXPECTED;
use catalog_api::{build_router, AppState, ProductService, RandomCodes};
use catalog_core::Product;
use catalog_db::MemoryProductStore;

fn app_with(store: Arc<MemoryProductStore>) -> Router {
    let service = ProductService::new(store, Arc::new(RandomCodes::seeded(2024)));
    build_router(AppState::new(service))
}

fn seeded() -> Arc<MemoryProductStore> {
    Arc::new(MemoryProductStore::with_products([
        Product::new(123, "Notebook Dell Inspiron"),
        Product::new(456, "Monitor LG UltraGear"),
    ]))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn create_then_get_returns_same_product() {
    let app = app_with(Arc::new(MemoryProductStore::new()));

    let (status, created) = send(
        &app,
        Method::POST,
        "/produtos",
        Some(json!({ "description": "Notebook Dell Inspiron" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["description"], "Notebook Dell Inspiron");

    let code = created["code"].as_i64().unwrap();
    assert!((1_000..=999_999).contains(&code));

    let (status, fetched) = send(&app, Method::GET, &format!("/produtos/{code}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn create_accepts_legacy_field_names() {
    let app = app_with(Arc::new(MemoryProductStore::new()));

    let (status, created) = send(
        &app,
        Method::POST,
        "/produtos",
        Some(json!({ "CodProd": 42, "DescrProd": "Mouse Logitech" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created, json!({ "code": 42, "description": "Mouse Logitech" }));
}

#[tokio::test]
async fn create_with_existing_code_is_bad_request() {
    let app = app_with(seeded());

    let (status, body) = send(
        &app,
        Method::POST,
        "/produtos",
        Some(json!({ "code": 123, "description": "Duplicate" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({
            "statusCode": 400,
            "message": "product with code 123 already exists",
            "error": "Bad Request"
        })
    );
}

#[tokio::test]
async fn put_on_missing_product_is_not_found() {
    let app = app_with(seeded());

    let (status, body) = send(
        &app,
        Method::PUT,
        "/produtos/999",
        Some(json!({ "description": "Ghost" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["statusCode"], 404);
    assert_eq!(body["message"], "product with code 999 not found");
}

#[tokio::test]
async fn put_updates_description() {
    let app = app_with(seeded());

    let (status, body) = send(
        &app,
        Method::PUT,
        "/produtos/456",
        Some(json!({ "description": "Monitor LG 27" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "code": 456, "description": "Monitor LG 27" }));
}

#[tokio::test]
async fn save_with_unknown_code_names_it() {
    let store = seeded();
    let app = app_with(store.clone());

    let (status, body) = send(
        &app,
        Method::POST,
        "/produtos/save",
        Some(json!({ "code": 999, "description": "X" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("999"));
    assert_eq!(store.len().await, 2);
}

#[tokio::test]
async fn save_without_code_creates() {
    let app = app_with(seeded());

    let (status, body) = send(
        &app,
        Method::POST,
        "/produtos/save",
        Some(json!({ "description": "SSD Kingston NV2" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["description"], "SSD Kingston NV2");
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let app = app_with(seeded());

    let (status, body) = send(&app, Method::DELETE, "/produtos/123", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "message": "product with code 123 deleted successfully" })
    );

    let (status, _) = send(&app, Method::GET, "/produtos/123", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_numeric_id_is_rejected() {
    let app = app_with(seeded());

    for method in [Method::GET, Method::DELETE] {
        let (status, body) = send(&app, method, "/produtos/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], NUMERIC_ID_EXPECTED);
    }
}

#[tokio::test]
async fn malformed_body_is_rejected() {
    let app = app_with(seeded());

    let (status, body) = send(
        &app,
        Method::POST,
        "/produtos",
        Some(json!({ "code": "abc", "description": "Wrong type" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["statusCode"], 400);

    let (status, body) = send(
        &app,
        Method::POST,
        "/produtos",
        Some(json!({ "description": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "description should not be empty");
}

#[tokio::test]
async fn list_and_search() {
    let app = app_with(seeded());

    let (status, body) = send(&app, Method::GET, "/produtos", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (status, body) = send(&app, Method::GET, "/produtos/search?descricao=monitor", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{ "code": 456, "description": "Monitor LG UltraGear" }])
    );

    let (status, _) = send(&app, Method::GET, "/produtos/search", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn gateway_failure_is_hidden() {
    let store = seeded();
    store.set_offline(true);
    let app = app_with(store);

    let (status, body) = send(&app, Method::GET, "/produtos", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "error listing products");

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, json!({ "status": "unavailable" }));
}

#[tokio::test]
async fn health_ok() {
    let app = app_with(seeded());

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}
