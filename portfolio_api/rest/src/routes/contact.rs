use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use portfolio_core_contact_contracts::{ContactFeatureService, ContactSubmitError};
use tracing::debug;

use super::method_not_allowed;
use crate::models::{contact::ApiContactSubmission, ApiResponse};

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route(
            "/api/contact",
            routing::post(submit).fallback(method_not_allowed),
        )
        .with_state(service)
}

async fn submit(
    service: State<Arc<impl ContactFeatureService>>,
    payload: Result<Json<ApiContactSubmission>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(err) => {
            debug!("Invalid contact form payload: {err}");
            return respond(StatusCode::BAD_REQUEST, "Invalid request body.");
        }
    };

    match service.submit(payload.into()).await {
        Ok(_) => respond(StatusCode::CREATED, "Message sent successfully!"),
        Err(
            err @ (ContactSubmitError::MissingFields
            | ContactSubmitError::InvalidEmail
            | ContactSubmitError::TooLong(_)),
        ) => respond(StatusCode::BAD_REQUEST, err.to_string()),
        Err(ContactSubmitError::Other(err)) => {
            tracing::error!("Failed to store contact form submission: {err:#}");
            respond(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to send message. Please try again.",
            )
        }
    }
}

fn respond(code: StatusCode, message: impl Into<String>) -> Response {
    let response = ApiResponse {
        success: code.is_success(),
        message: message.into(),
    };
    (code, Json(response)).into_response()
}
