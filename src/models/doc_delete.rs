use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response returned after deleting a document
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteResponse {
    pub message: String,
    pub document_id: String,
}

impl DeleteResponse {
    pub fn pending(document_id: String) -> Self {
        Self {
            message: "Delete endpoint (not yet implemented)".to_string(),
            document_id,
        }
    }
}
