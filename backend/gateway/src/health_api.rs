//! Liveness endpoint.

use axum::response::Json;
use serde::Serialize;

pub const SERVICE_NAME: &str = "biomechanics-inference";

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: String,
    pub service: String,
}

/// Handler for `GET /health`. Always succeeds with a fixed payload.
pub async fn health() -> Json<HealthReport> {
    Json(HealthReport {
        status: "healthy".into(),
        service: SERVICE_NAME.into(),
    })
}
