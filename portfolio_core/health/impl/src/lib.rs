use std::{sync::Arc, time::Duration};

use chrono::{DateTime, Utc};
use portfolio_core_health_contracts::{HealthFeatureService, HealthStatus};
use portfolio_di::Build;
use portfolio_persistence_contracts::Database;
use portfolio_shared_contracts::time::TimeService;
use tokio::sync::RwLock;
use tracing::error;

#[derive(Debug, Clone, Build)]
pub struct HealthFeatureServiceImpl<Time, Db> {
    time: Time,
    db: Db,
    config: HealthFeatureConfig,
    #[state]
    state: Arc<State>,
}

#[derive(Debug, Clone)]
pub struct HealthFeatureConfig {
    pub cache_ttl: Duration,
}

#[derive(Debug, Default)]
struct State {
    cache: RwLock<Option<CachedStatus>>,
}

#[derive(Debug)]
struct CachedStatus {
    status: HealthStatus,
    timestamp: DateTime<Utc>,
}

impl<Time, Db> HealthFeatureServiceImpl<Time, Db> {
    fn is_fresh(&self, cached: &CachedStatus, now: DateTime<Utc>) -> bool {
        now < cached.timestamp + self.config.cache_ttl
    }
}

impl<Time, Db> HealthFeatureService for HealthFeatureServiceImpl<Time, Db>
where
    Time: TimeService,
    Db: Database,
{
    async fn get_status(&self) -> HealthStatus {
        let now = self.time.now();
        let cache_guard = self.state.cache.read().await;
        if let Some(cached) = cache_guard.as_ref().filter(|c| self.is_fresh(c, now)) {
            return cached.status;
        }
        drop(cache_guard);

        let mut cache_guard = self.state.cache.write().await;
        if let Some(cached) = cache_guard.as_ref().filter(|c| self.is_fresh(c, now)) {
            return cached.status;
        }

        let database = self
            .db
            .ping()
            .await
            .inspect_err(|err| error!("Failed to ping database: {err:#}"))
            .is_ok();

        let status = HealthStatus { database };

        cache_guard
            .insert(CachedStatus {
                status,
                timestamp: now,
            })
            .status
    }
}
