use portfolio_persistence_mongodb::{MongoDatabase, MongoDatabaseConfig};
use uuid::Uuid;

pub type Db = MongoDatabase;

/// Connect to a fresh database on the server configured for development.
///
/// Every call uses its own database, so tests can run in parallel. Call
/// [`teardown`] at the end of the test to drop it again.
pub async fn setup() -> Db {
    let config = portfolio_config::load(&[] as &[&str]).unwrap();

    let db = Db::new(MongoDatabaseConfig {
        url: config.database.url,
        name: format!("{}_test_{}", config.database.name, Uuid::new_v4().simple()),
        max_pool_size: config.database.max_pool_size,
        connect_timeout: config.database.connect_timeout.into(),
        server_selection_timeout: config.database.server_selection_timeout.into(),
    });

    db.reset().await.unwrap();
    db
}

pub async fn teardown(db: Db) {
    db.reset().await.unwrap();
}
