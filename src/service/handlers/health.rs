//! Liveness endpoint

use axum::response::Json;

use crate::service::types::HealthResponse;

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
