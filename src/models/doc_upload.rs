use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Multipart form accepted by the upload endpoint
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UploadDocumentForm {
    /// The document file
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}

/// Response returned after uploading a document
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UploadResponse {
    pub message: String,
    pub filename: String,
    /// Content type declared by the file part, if any
    pub content_type: Option<String>,
}

impl UploadResponse {
    pub fn pending(filename: String, content_type: Option<String>) -> Self {
        Self {
            message: "Upload endpoint (not yet implemented)".to_string(),
            filename,
            content_type,
        }
    }
}
