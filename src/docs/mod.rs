use utoipa::OpenApi;
use crate::models::*;

/// Service banner
#[utoipa::path(
    get,
    path = "/",
    tag = "service",
    responses(
        (status = 200, description = "Service is operational", body = RootResponse)
    )
)]
#[allow(dead_code)]
pub async fn root_doc() {}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "service",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
#[allow(dead_code)]
pub async fn health_check_doc() {}

/// Upload a document for processing
#[utoipa::path(
    post,
    path = "/documents/upload",
    tag = "documents",
    request_body(content = UploadDocumentForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Upload acknowledged", body = UploadResponse),
        (status = 413, description = "Upload exceeds the body limit", body = ErrorResponse),
        (status = 422, description = "Missing or invalid file part", body = ErrorResponse)
    )
)]
#[allow(dead_code)]
pub async fn upload_document_doc() {}

/// Trigger analysis of an uploaded document
#[utoipa::path(
    post,
    path = "/documents/{document_id}/analyze",
    tag = "documents",
    params(
        ("document_id" = String, Path, description = "Document identifier")
    ),
    responses(
        (status = 200, description = "Analysis acknowledged", body = AnalyzeResponse)
    )
)]
#[allow(dead_code)]
pub async fn analyze_document_doc() {}

/// Generate a new document from a template
#[utoipa::path(
    post,
    path = "/documents/generate",
    tag = "documents",
    params(GenerateQuery),
    request_body(content = Object, description = "Metadata to inject into the template", content_type = "application/json"),
    responses(
        (status = 200, description = "Generation acknowledged", body = GenerateResponse),
        (status = 422, description = "Missing template id or invalid metadata", body = ErrorResponse)
    )
)]
#[allow(dead_code)]
pub async fn generate_document_doc() {}

/// Get all documents in a folder
#[utoipa::path(
    get,
    path = "/documents/",
    tag = "documents",
    params(ListDocumentsQuery),
    responses(
        (status = 200, description = "Documents of the folder", body = DocumentListResponse),
        (status = 422, description = "Missing folder id", body = ErrorResponse)
    )
)]
#[allow(dead_code)]
pub async fn list_documents_doc() {}

/// Delete a document
#[utoipa::path(
    delete,
    path = "/documents/{document_id}",
    tag = "documents",
    params(
        ("document_id" = String, Path, description = "Document identifier")
    ),
    responses(
        (status = 200, description = "Deletion acknowledged", body = DeleteResponse)
    )
)]
#[allow(dead_code)]
pub async fn delete_document_doc() {}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "SYNAPSE API",
        description = "Engineering Document Management Platform API",
        version = "1.0.0"
    ),
    paths(
        root_doc,
        health_check_doc,
        upload_document_doc,
        analyze_document_doc,
        generate_document_doc,
        list_documents_doc,
        delete_document_doc,
    ),
    components(
        schemas(
            RootResponse,
            HealthResponse,
            ErrorResponse,
            UploadDocumentForm,
            UploadResponse,
            AnalyzeResponse,
            GenerateResponse,
            DocumentListResponse,
            DeleteResponse,
            Document,
            DocumentType,
            DocumentStatus,
            DocumentMetadata,
            AxisData,
            AxisDirection,
            BomEntry,
        )
    ),
    tags(
        (name = "service", description = "Service status endpoints"),
        (name = "documents", description = "Document endpoints")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_endpoint_is_documented() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;
        for path in [
            "/",
            "/health",
            "/documents/upload",
            "/documents/{document_id}/analyze",
            "/documents/generate",
            "/documents/",
            "/documents/{document_id}",
        ] {
            assert!(paths.contains_key(path), "missing path {path}");
        }
        assert_eq!(doc.info.title, "SYNAPSE API");
        assert_eq!(doc.info.version, "1.0.0");
    }
}
