pub mod product;
pub mod supplier;

use axum::Json;
use serde_json::{json, Value};

// GET /
pub async fn index() -> Json<Value> {
    Json(json!({ "message": "hello world" }))
}

// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}
