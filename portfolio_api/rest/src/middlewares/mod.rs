use axum::Router;

mod cors;
mod panic_handler;
mod request_id;
mod trace;

#[cfg(test)]
pub use request_id::REQUEST_ID_HEADER;

/// Wrap the router in all middlewares, the first one added being the
/// innermost.
pub fn add(router: Router<()>, allowed_origins: &[String]) -> anyhow::Result<Router<()>> {
    let router = panic_handler::add(router);
    let router = trace::add(router);
    let router = request_id::add(router);
    cors::add(router, allowed_origins)
}
