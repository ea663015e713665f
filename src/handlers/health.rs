use axum::{response::IntoResponse, Json};
use serde_json::json;

/// Liveness probe. The service keeps no state and holds no connections, so
/// there is nothing to degrade.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}
