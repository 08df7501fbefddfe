use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::Document;

/// Query parameters for listing documents
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListDocumentsQuery {
    /// Folder to fetch documents from
    // The web client sends `folderId`
    #[serde(alias = "folderId")]
    pub folder_id: String,
}

/// Response for listing the documents of a folder
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DocumentListResponse {
    pub message: String,
    pub folder_id: String,
    pub documents: Vec<Document>,
}

impl DocumentListResponse {
    pub fn pending(folder_id: String) -> Self {
        Self {
            message: "Get documents endpoint (not yet implemented)".to_string(),
            folder_id,
            documents: Vec::new(),
        }
    }
}
