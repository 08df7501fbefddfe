use axum::{extract::Path, Json};
use crate::models::DeleteResponse;
use tracing::debug;

/// Delete a document
pub async fn delete_document(Path(document_id): Path<String>) -> Json<DeleteResponse> {
    debug!("Delete requested for document '{}'", document_id);
    Json(DeleteResponse::pending(document_id))
}
