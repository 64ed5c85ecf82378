use axum::{
    http::{StatusCode, Uri},
    response::Response,
};

use super::error;

pub async fn not_found(uri: Uri) -> Response {
    let path = uri.path();
    let detail = if path == "/api" || path.starts_with("/api/") {
        "API route not found"
    } else {
        "Not found"
    };
    error(StatusCode::NOT_FOUND, detail)
}
