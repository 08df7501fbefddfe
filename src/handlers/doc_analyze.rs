use axum::{extract::Path, Json};
use crate::models::AnalyzeResponse;
use tracing::debug;

/// Request analysis of a document
pub async fn analyze_document(Path(document_id): Path<String>) -> Json<AnalyzeResponse> {
    debug!("Analysis requested for document '{}'", document_id);
    Json(AnalyzeResponse::pending(document_id))
}
