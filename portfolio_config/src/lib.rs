use std::{net::IpAddr, path::Path, path::PathBuf};

use anyhow::Context;
use config::{Environment, File, FileFormat, Map};
use serde::Deserialize;

pub use duration::Duration;

mod duration;

/// Prefix of environment variables overriding config values, e.g.
/// `PORTFOLIO__HTTP__PORT=8080`.
pub const ENV_PREFIX: &str = "PORTFOLIO";

/// Environment variable overriding `database.url`.
pub const MONGODB_URI_ENV: &str = "MONGODB_URI";

/// Load the configuration.
///
/// Sources are applied in order, later ones taking precedence: the embedded
/// default config, each file in `paths` and finally the environment.
pub fn load(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    load_from(paths, None, std::env::var(MONGODB_URI_ENV).ok())
}

fn load_from(
    paths: &[impl AsRef<Path>],
    env: Option<Map<String, String>>,
    mongodb_uri: Option<String>,
) -> anyhow::Result<Config> {
    let defaults = File::from_str(portfolio_assets::CONFIG_TOML, FileFormat::Toml);

    paths
        .iter()
        .try_fold(
            config::Config::builder().add_source(defaults),
            |builder, path| {
                let path = path.as_ref();
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file at {}", path.display()))?;
                let source = File::from_str(&content, FileFormat::Toml);
                anyhow::Ok(builder.add_source(source))
            },
        )?
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("http.allowed_origins")
                .try_parsing(true)
                .source(env),
        )
        .set_override_option(
            "database.url",
            mongodb_uri.filter(|x| !x.trim().is_empty()),
        )?
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub database: DatabaseConfig,
    pub health: HealthConfig,
    #[serde(default)]
    pub content: ContentConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
    pub allowed_origins: Vec<String>,
}

#[derive(Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub name: String,
    pub max_pool_size: u32,
    pub connect_timeout: Duration,
    pub server_selection_timeout: Duration,
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // the connection string usually contains credentials
        f.debug_struct("DatabaseConfig")
            .field("url", &"<redacted>")
            .field("name", &self.name)
            .field("max_pool_size", &self.max_pool_size)
            .field("connect_timeout", &self.connect_timeout)
            .field("server_selection_timeout", &self.server_selection_timeout)
            .finish()
    }
}

#[derive(Debug, Deserialize)]
pub struct HealthConfig {
    pub cache_ttl: Duration,
}

#[derive(Debug, Default, Deserialize)]
pub struct ContentConfig {
    /// JSON file replacing the embedded content document.
    pub path: Option<PathBuf>,
}
