//! Route definitions and router builder.

pub mod health;
pub mod info;
pub mod root;

use axum::Router;
use axum::routing::any;
use tower_http::trace::TraceLayer;

/// Build the Axum router with the three fixed routes.
///
/// Routes match on path only, so every method is served. Any other path
/// gets axum's default 404.
pub fn build_router() -> Router {
    Router::new()
        .route("/", any(root::usage))
        .route("/health", any(health::health))
        .route("/info", any(info::info))
        .layer(TraceLayer::new_for_http())
}
