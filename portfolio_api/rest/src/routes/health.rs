use std::sync::Arc;

use axum::{extract::State, routing, Json, Router};
use portfolio_core_health_contracts::{HealthFeatureService, HealthStatus};
use serde::Serialize;

use super::method_not_allowed;

pub fn router(service: Arc<impl HealthFeatureService>) -> Router<()> {
    Router::new()
        .route(
            "/api/health",
            routing::get(health).fallback(method_not_allowed),
        )
        .with_state(service)
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    message: &'static str,
    database: bool,
}

async fn health(service: State<Arc<impl HealthFeatureService>>) -> Json<HealthResponse> {
    let HealthStatus { database } = service.get_status().await;

    Json(HealthResponse {
        status: "OK",
        message: "Backend is running",
        database,
    })
}
