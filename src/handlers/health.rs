use axum::Json;
use crate::models::{HealthResponse, RootResponse, API_VERSION, SERVICE_TITLE};
use tracing::debug;

/// Service banner
pub async fn root() -> Json<RootResponse> {
    debug!("Root requested");
    Json(RootResponse {
        message: SERVICE_TITLE.to_string(),
        version: API_VERSION.to_string(),
        status: "operational".to_string(),
    })
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    debug!("Health check requested");
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}
