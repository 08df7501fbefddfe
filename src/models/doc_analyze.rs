use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response returned after requesting analysis of a document
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeResponse {
    pub message: String,
    pub document_id: String,
}

impl AnalyzeResponse {
    pub fn pending(document_id: String) -> Self {
        Self {
            message: "Analyze endpoint (not yet implemented)".to_string(),
            document_id,
        }
    }
}
