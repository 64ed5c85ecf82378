use portfolio_config::DatabaseConfig;
use portfolio_persistence_mongodb::{MongoDatabase, MongoDatabaseConfig};

/// Create the database handle. The connection is established on first use.
pub fn connect(config: &DatabaseConfig) -> MongoDatabase {
    MongoDatabase::new(MongoDatabaseConfig {
        url: config.url.clone(),
        name: config.name.clone(),
        max_pool_size: config.max_pool_size,
        connect_timeout: config.connect_timeout.into(),
        server_selection_timeout: config.server_selection_timeout.into(),
    })
}
