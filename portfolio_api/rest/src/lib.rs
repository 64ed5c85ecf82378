use std::{future::Future, net::IpAddr, sync::Arc};

use anyhow::Context;
use axum::Router;
use portfolio_core_contact_contracts::ContactFeatureService;
use portfolio_core_content_contracts::ContentFeatureService;
use portfolio_core_health_contracts::HealthFeatureService;
use portfolio_di::Build;
use tokio::net::TcpListener;
use tracing::info;

mod middlewares;
mod models;
mod routes;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Build)]
pub struct RestServer<Health, Content, Contact> {
    config: RestServerConfig,
    health: Health,
    content: Content,
    contact: Contact,
}

#[derive(Debug, Clone)]
pub struct RestServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Origins allowed to make cross origin requests. An entry may contain a
    /// single `*` matching one host label, e.g. `https://*.vercel.app`.
    pub allowed_origins: Arc<[String]>,
}

impl<Health, Content, Contact> RestServer<Health, Content, Contact>
where
    Health: HealthFeatureService,
    Content: ContentFeatureService,
    Contact: ContactFeatureService,
{
    /// Serve the api until `shutdown` resolves.
    pub async fn serve(
        self,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> anyhow::Result<()> {
        let RestServerConfig { host, port, .. } = self.config;
        let router = self.router()?;

        let listener = TcpListener::bind((host, port))
            .await
            .with_context(|| format!("Failed to bind to {host}:{port}"))?;
        info!("listening on {}", listener.local_addr()?);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(Into::into)
    }

    fn router(self) -> anyhow::Result<Router<()>> {
        let router = Router::new()
            .merge(routes::health::router(self.health.into()))
            .merge(routes::portfolio::router(self.content.into()))
            .merge(routes::contact::router(self.contact.into()))
            .fallback(routes::fallback::not_found);

        middlewares::add(router, &self.config.allowed_origins)
    }
}
