//! Static files compiled into the binary.

/// The default content document served by `GET /api/portfolio`.
pub const PORTFOLIO_JSON: &str = include_str!("../assets/portfolio.json");

/// The default configuration.
pub const CONFIG_TOML: &str = include_str!("../../config.toml");
