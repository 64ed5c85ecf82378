use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use portfolio_core_content_contracts::ContentFeatureService;

use super::method_not_allowed;

pub fn router(service: Arc<impl ContentFeatureService>) -> Router<()> {
    Router::new()
        .route(
            "/api/portfolio",
            routing::get(get_portfolio).fallback(method_not_allowed),
        )
        .with_state(service)
}

async fn get_portfolio(service: State<Arc<impl ContentFeatureService>>) -> Response {
    let document = service.get_document();
    Json(&*document).into_response()
}
