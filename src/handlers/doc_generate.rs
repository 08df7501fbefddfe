use crate::{
    error::ApiError,
    extract::{ValidatedJson, ValidatedQuery},
    models::{GenerateMetadata, GenerateQuery, GenerateResponse},
};
use axum::Json;
use tracing::debug;

/// Request generation of a document from a template
pub async fn generate_document(
    ValidatedQuery(query): ValidatedQuery<GenerateQuery>,
    ValidatedJson(metadata): ValidatedJson<GenerateMetadata>,
) -> Result<Json<GenerateResponse>, ApiError> {
    debug!(
        "Generation requested from template '{}' with {} metadata keys",
        query.template_id,
        metadata.len()
    );
    Ok(Json(GenerateResponse::pending(query.template_id)))
}
