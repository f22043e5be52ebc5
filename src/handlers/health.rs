use axum::{http::StatusCode, response::Json};

/// GET /
pub async fn root() -> &'static str {
    "XWifi API is running!"
}

/// GET /health
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(serde_json::json!({ "status": "ok" })),
    )
}
