use portfolio_config::Config;
use portfolio_di::Provide;
use tracing::{error, info};

use crate::{
    database,
    environment::{types::RestServer, ConfigProvider, Provider},
};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let database = database::connect(&config.database);

    let config_provider = ConfigProvider::new(&config)?;
    let mut provider = Provider::new(config_provider, database);
    let server: RestServer = provider.provide();
    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve(shutdown_signal()).await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl+C, shutting down"),
        Err(err) => {
            error!("Failed to listen for Ctrl+C: {err}");
            std::future::pending().await
        }
    }
}
