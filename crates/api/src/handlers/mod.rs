pub mod blacklist;
pub mod records;
pub mod report;
pub mod stats;

use axum::Json;
use serde_json::{json, Value};

pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
