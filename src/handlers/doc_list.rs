use crate::{
    error::ApiError,
    extract::ValidatedQuery,
    models::{DocumentListResponse, ListDocumentsQuery},
};
use axum::Json;
use tracing::debug;

/// List the documents of a folder
pub async fn list_documents(
    ValidatedQuery(query): ValidatedQuery<ListDocumentsQuery>,
) -> Result<Json<DocumentListResponse>, ApiError> {
    debug!("Listing documents of folder '{}'", query.folder_id);
    Ok(Json(DocumentListResponse::pending(query.folder_id)))
}
