/// Common test utilities and helpers
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use supplier_inventory::store::MemoryStore;
use supplier_inventory::{app, AppState};

/// Router over a fresh in-memory store
pub fn setup_test_app() -> Router {
    app(AppState::new(Arc::new(MemoryStore::new())))
}

/// Send one request and return the status with the decoded JSON body
/// (`Value::Null` for non-JSON bodies).
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(b) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(b.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

pub fn supplier_body(name: &str) -> Value {
    json!({
        "name": name,
        "company": format!("{name} Trading"),
        "phone": "555-0100",
        "email": format!("{}@example.test", name.to_lowercase()),
    })
}

/// Create a supplier and return its id
pub async fn create_supplier(app: &Router, name: &str) -> i64 {
    let (status, body) = send(app, "POST", "/supplier", Some(supplier_body(name))).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    body["data"]["id"].as_i64().unwrap()
}

/// Create a product under `supplier_id` and return its id
pub async fn create_product(app: &Router, supplier_id: i64, body: Value) -> i64 {
    let (status, body) = send(app, "POST", &format!("/product/{supplier_id}"), Some(body)).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    body["data"]["id"].as_i64().unwrap()
}
