use serde::Serialize;

pub mod contact;

/// Result of an operation triggered by the frontend.
#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiError {
    pub error: &'static str,
}

#[derive(Serialize)]
pub struct ApiMessage {
    pub message: &'static str,
}
