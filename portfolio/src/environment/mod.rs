use portfolio_api_rest::RestServerConfig;
use portfolio_config::Config;
use portfolio_core_content_impl::ContentFeatureConfig;
use portfolio_core_health_impl::HealthFeatureConfig;
use portfolio_di::provider;
use types::Database;

pub mod types;

provider! {
    /// The default provider, capable of providing all the dependencies
    pub Provider {
        database: Database,
        ..config: ConfigProvider {
            // API
            RestServerConfig,

            // Core
            ContentFeatureConfig,
            HealthFeatureConfig,
        }
    }
}

impl Provider {
    pub fn new(config: ConfigProvider, database: Database) -> Self {
        Self {
            _cache: Default::default(),
            database,
            config,
        }
    }
}

provider! {
    /// Reduced provider, capable of providing services that only depend on the configuration
    pub ConfigProvider {
        // API
        rest_server_config: RestServerConfig,

        // Core
        content_feature_config: ContentFeatureConfig,
        health_feature_config: HealthFeatureConfig,
    }
}

impl ConfigProvider {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        // API
        let rest_server_config = RestServerConfig {
            host: config.http.host,
            port: config.http.port,
            allowed_origins: config.http.allowed_origins.clone().into(),
        };

        // Core
        let content_feature_config = match &config.content.path {
            Some(path) => ContentFeatureConfig::from_file(path)?,
            None => ContentFeatureConfig::embedded()?,
        };

        let health_feature_config = HealthFeatureConfig {
            cache_ttl: config.health.cache_ttl.into(),
        };

        Ok(Self {
            _cache: Default::default(),

            // API
            rest_server_config,

            // Core
            content_feature_config,
            health_feature_config,
        })
    }
}

#[cfg(test)]
mod tests {
    use portfolio_di::Provide;
    use types::{ContactFeature, RestServer};

    use super::*;
    use crate::database;

    #[test]
    fn provide_rest_server() {
        let config = portfolio_config::load(&[] as &[&str]).unwrap();
        let config_provider = ConfigProvider::new(&config).unwrap();

        let database = database::connect(&config.database);

        let mut provider = Provider::new(config_provider, database);
        let _: RestServer = provider.provide();
        let _: ContactFeature = provider.provide();
    }

    #[test]
    fn missing_content_file() {
        let mut config = portfolio_config::load(&[] as &[&str]).unwrap();
        config.content.path = Some("/does/not/exist.json".into());

        assert!(ConfigProvider::new(&config).is_err());
    }
}
