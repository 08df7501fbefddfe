use crate::{error::ApiError, models::UploadResponse};
use axum::{
    extract::{multipart::MultipartRejection, Multipart},
    Json,
};
use tracing::debug;

const FILE_FIELD: &str = "file";

/// Accept a document upload. The file is read and discarded.
pub async fn upload_document(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut multipart = multipart?;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            debug!("Skipping multipart field {:?}", field.name());
            continue;
        }

        let filename = match field.file_name() {
            Some(name) => name.to_string(),
            None => {
                return Err(ApiError::Validation(format!(
                    "Field '{}' must be a file upload",
                    FILE_FIELD
                )))
            }
        };
        let content_type = field.content_type().map(str::to_string);

        let data = field.bytes().await?;
        debug!(
            "Received upload '{}' ({} bytes, content type {:?})",
            filename,
            data.len(),
            content_type
        );

        return Ok(Json(UploadResponse::pending(filename, content_type)));
    }

    Err(ApiError::Validation(format!(
        "Missing required multipart field '{}'",
        FILE_FIELD
    )))
}
