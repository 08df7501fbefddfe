#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, Response},
    Router,
};
use synapse_api::{create_app, Config};
use tower::ServiceExt;

pub const BOUNDARY: &str = "synapse-test-boundary";

pub fn app() -> Router {
    create_app(&Config::default())
}

pub async fn send(app: Router, req: Request<Body>) -> Response<Body> {
    match app.oneshot(req).await {
        Ok(resp) => resp,
        Err(e) => panic!("handler error: {e}"),
    }
}

pub fn request(method: &str, uri: &str) -> Request<Body> {
    match Request::builder().method(method).uri(uri).body(Body::empty()) {
        Ok(r) => r,
        Err(e) => panic!("failed to build request: {e}"),
    }
}

pub fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    match Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
    {
        Ok(r) => r,
        Err(e) => panic!("failed to build request: {e}"),
    }
}

/// One multipart part: field name, optional filename, optional content type, payload
pub struct Part<'a> {
    pub name: &'a str,
    pub filename: Option<&'a str>,
    pub content_type: Option<&'a str>,
    pub data: &'a str,
}

pub fn multipart_request(uri: &str, parts: &[Part<'_>]) -> Request<Body> {
    let mut body = String::new();
    for part in parts {
        body.push_str(&format!("--{BOUNDARY}\r\n"));
        match part.filename {
            Some(filename) => body.push_str(&format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                part.name, filename
            )),
            None => body.push_str(&format!(
                "Content-Disposition: form-data; name=\"{}\"\r\n",
                part.name
            )),
        }
        if let Some(content_type) = part.content_type {
            body.push_str(&format!("Content-Type: {content_type}\r\n"));
        }
        body.push_str("\r\n");
        body.push_str(part.data);
        body.push_str("\r\n");
    }
    body.push_str(&format!("--{BOUNDARY}--\r\n"));

    match Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
    {
        Ok(r) => r,
        Err(e) => panic!("failed to build request: {e}"),
    }
}

pub async fn json_body(resp: Response<Body>) -> serde_json::Value {
    let bytes = match axum::body::to_bytes(resp.into_body(), 64 * 1024).await {
        Ok(b) => b,
        Err(e) => panic!("failed to read body: {e}"),
    };
    match serde_json::from_slice(&bytes) {
        Ok(v) => v,
        Err(e) => panic!("invalid JSON: {e}"),
    }
}
