use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::{ApiError, ApiMessage};

pub mod contact;
pub mod fallback;
pub mod health;
pub mod portfolio;

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err:#}");
    error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}

fn error(code: StatusCode, detail: &'static str) -> Response {
    (code, Json(ApiError { error: detail })).into_response()
}

async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ApiMessage {
            message: "Method not allowed",
        }),
    )
        .into_response()
}
