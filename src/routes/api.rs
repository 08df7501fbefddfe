use crate::{
    config::Config,
    docs::ApiDoc,
    handlers::{
        analyze_document, delete_document, generate_document, health_check, list_documents,
        method_not_allowed, not_found, root, upload_document,
    },
    routes::cors::cors_layer,
};
use axum::{
    extract::DefaultBodyLimit,
    middleware::map_response,
    routing::{delete, get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create service routes
pub fn create_service_routes() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
}

/// Create document routes
pub fn create_document_routes() -> Router {
    Router::new()
        .route("/documents", get(list_documents))
        .route("/documents/", get(list_documents))
        // DELETE on the static segments still treats them as document ids
        .route(
            "/documents/upload",
            post(upload_document).delete(delete_document),
        )
        .route(
            "/documents/generate",
            post(generate_document).delete(delete_document),
        )
        .route("/documents/:document_id/analyze", post(analyze_document))
        .route("/documents/:document_id", delete(delete_document))
}

/// Assemble the full application
pub fn create_app(config: &Config) -> Router {
    Router::new()
        .merge(create_service_routes())
        .merge(create_document_routes())
        .merge(SwaggerUi::new("/swagger").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(not_found)
        .layer(map_response(method_not_allowed))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(cors_layer(&config.allowed_origins()))
        .layer(TraceLayer::new_for_http())
}
