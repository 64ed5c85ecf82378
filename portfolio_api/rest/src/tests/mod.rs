use std::sync::Arc;

use axum::{
    body::Body,
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use portfolio_core_contact_contracts::MockContactFeatureService;
use portfolio_core_content_contracts::MockContentFeatureService;
use portfolio_core_health_contracts::MockHealthFeatureService;
use tower::ServiceExt;

use crate::{RestServer, RestServerConfig};

mod contact;

type Sut = RestServer<MockHealthFeatureService, MockContentFeatureService, MockContactFeatureService>;

impl Default for Sut {
    fn default() -> Self {
        Self {
            config: RestServerConfig {
                host: [127, 0, 0, 1].into(),
                port: 0,
                allowed_origins: Arc::new([
                    "http://localhost:3000".into(),
                    "https://*.vercel.app".into(),
                ]),
            },
            health: MockHealthFeatureService::new(),
            content: MockContentFeatureService::new(),
            contact: MockContactFeatureService::new(),
        }
    }
}

fn router(sut: Sut) -> Router<()> {
    sut.router().unwrap()
}

struct TestResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl TestResponse {
    fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

async fn send(router: Router<()>, request: Request<Body>) -> TestResponse {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();
    TestResponse {
        status,
        headers,
        body,
    }
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::post(uri)
        .header("Content-Type", "application/json")
        .body(body.into())
        .unwrap()
}
