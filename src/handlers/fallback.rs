use axum::{
    http::{header, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use crate::error::ApiError;
use tracing::debug;

/// Catch-all for unknown routes
pub async fn not_found(uri: Uri) -> ApiError {
    debug!("No route for '{}'", uri.path());
    ApiError::NotFound(uri.path().to_string())
}

/// Give the router's bodyless 405 an `ErrorResponse`, keeping its `Allow` header
pub async fn method_not_allowed(method: Method, uri: Uri, response: Response) -> Response {
    if response.status() != StatusCode::METHOD_NOT_ALLOWED {
        return response;
    }

    debug!("Method {} not allowed for '{}'", method, uri.path());
    let allow = response.headers().get(header::ALLOW).cloned();
    let mut rendered = ApiError::MethodNotAllowed {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
    .into_response();
    if let Some(allow) = allow {
        rendered.headers_mut().insert(header::ALLOW, allow);
    }
    rendered
}
