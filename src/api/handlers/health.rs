use axum::Json;
use hyper::StatusCode;
use serde_json::{Value, json};

// GET /health
pub async fn health() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}
