use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const SERVICE_TITLE: &str = "SYNAPSE API";
pub const API_VERSION: &str = "1.0.0";

/// API response for the service root
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RootResponse {
    #[schema(example = "SYNAPSE API")]
    pub message: String,
    #[schema(example = "1.0.0")]
    pub version: String,
    #[schema(example = "operational")]
    pub status: String,
}

/// API response for health check
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
}
