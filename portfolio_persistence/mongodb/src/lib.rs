use std::{sync::Arc, time::Duration};

use anyhow::Context;
use mongodb::{bson::doc, options::ClientOptions, Client};
use portfolio_persistence_contracts::Database;
use portfolio_utils::trace_instrument;
use tokio::sync::OnceCell;
use tracing::info;

pub mod submission;

/// Process wide handle to the MongoDB database.
///
/// Cloning is cheap and all clones share the same client, which is created
/// lazily on first use. Concurrent first uses wait for a single
/// initialization, and a failed initialization is retried on the next use.
#[derive(Debug, Clone)]
pub struct MongoDatabase {
    config: Arc<MongoDatabaseConfig>,
    client: Arc<OnceCell<Client>>,
}

pub struct MongoDatabaseConfig {
    pub url: String,
    pub name: String,
    pub max_pool_size: u32,
    pub connect_timeout: Duration,
    pub server_selection_timeout: Duration,
}

impl std::fmt::Debug for MongoDatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MongoDatabaseConfig")
            .field("name", &self.name)
            .field("max_pool_size", &self.max_pool_size)
            .field("connect_timeout", &self.connect_timeout)
            .field("server_selection_timeout", &self.server_selection_timeout)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone)]
pub struct MongoConnection {
    db: mongodb::Database,
}

impl MongoConnection {
    pub fn database(&self) -> &mongodb::Database {
        &self.db
    }
}

impl MongoDatabase {
    /// Create a handle without connecting to the database.
    pub fn new(config: MongoDatabaseConfig) -> Self {
        Self {
            config: config.into(),
            client: Default::default(),
        }
    }

    /// Whether the client has already been created.
    pub fn is_connected(&self) -> bool {
        self.client.initialized()
    }

    /// Drop the configured database including all collections.
    pub async fn reset(&self) -> anyhow::Result<()> {
        self.connect()
            .await?
            .db
            .drop()
            .await
            .context("Failed to drop database")
    }

    async fn client(&self) -> anyhow::Result<&Client> {
        self.client.get_or_try_init(|| self.create_client()).await
    }

    async fn create_client(&self) -> anyhow::Result<Client> {
        let mut options = ClientOptions::parse(self.config.url.as_str())
            .await
            .context("Failed to parse database url")?;
        options
            .app_name
            .get_or_insert_with(|| "portfolio".into());
        options.max_pool_size = Some(self.config.max_pool_size);
        options.connect_timeout = Some(self.config.connect_timeout);
        options.server_selection_timeout = Some(self.config.server_selection_timeout);

        let client = Client::with_options(options).context("Failed to create database client")?;
        info!(database = %self.config.name, "database client created");
        Ok(client)
    }
}

impl Database for MongoDatabase {
    type Connection = MongoConnection;

    async fn connect(&self) -> anyhow::Result<Self::Connection> {
        let client = self.client().await?;
        Ok(MongoConnection {
            db: client.database(&self.config.name),
        })
    }

    #[trace_instrument(skip(self))]
    async fn ping(&self) -> anyhow::Result<()> {
        let conn = self.connect().await?;
        conn.db
            .run_command(doc! { "ping": 1 })
            .await
            .context("Failed to ping database")?;
        Ok(())
    }
}
