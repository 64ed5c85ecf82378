use anyhow::Context;
use axum::{
    http::{header, request::Parts, HeaderValue, Method},
    Router,
};
use regex::Regex;
use tower_http::cors::{AllowOrigin, CorsLayer};

pub fn add<S: Clone + Send + Sync + 'static>(
    router: Router<S>,
    allowed_origins: &[String],
) -> anyhow::Result<Router<S>> {
    let origins = allowed_origins
        .iter()
        .map(|x| OriginPattern::new(x))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let layer = CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _: &Parts| {
                origin
                    .to_str()
                    .is_ok_and(|origin| origins.iter().any(|x| x.matches(origin)))
            },
        ))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true);

    Ok(router.layer(layer))
}

/// An allowed origin, either literal or with one `*` standing in for a
/// single host label.
#[derive(Debug)]
enum OriginPattern {
    Exact(String),
    Wildcard(Regex),
}

impl OriginPattern {
    fn new(pattern: &str) -> anyhow::Result<Self> {
        let pattern = pattern.trim().trim_end_matches('/');
        let Some((prefix, suffix)) = pattern.split_once('*') else {
            return Ok(Self::Exact(pattern.into()));
        };
        anyhow::ensure!(
            !suffix.contains('*'),
            "Allowed origin {pattern:?} contains more than one wildcard"
        );

        let regex = format!(
            "^{}[A-Za-z0-9-]+{}$",
            regex::escape(prefix),
            regex::escape(suffix)
        );
        Regex::new(&regex)
            .map(Self::Wildcard)
            .with_context(|| format!("Invalid allowed origin {pattern:?}"))
    }

    fn matches(&self, origin: &str) -> bool {
        match self {
            Self::Exact(pattern) => pattern == origin,
            Self::Wildcard(regex) => regex.is_match(origin),
        }
    }
}
