use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Query parameters for generating a document from a template
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GenerateQuery {
    /// Template document to use
    // The web client sends `templateId`
    #[serde(alias = "templateId")]
    pub template_id: String,
}

/// Metadata to inject into the template. Any JSON object is accepted.
pub type GenerateMetadata = serde_json::Map<String, serde_json::Value>;

/// Response returned after requesting document generation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GenerateResponse {
    pub message: String,
    pub template_id: String,
}

impl GenerateResponse {
    pub fn pending(template_id: String) -> Self {
        Self {
            message: "Generate endpoint (not yet implemented)".to_string(),
            template_id,
        }
    }
}
