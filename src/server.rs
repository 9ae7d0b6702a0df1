use axum::{routing::get, Router};

/// Liveness probe served on the port the runtime hands to the service.
pub fn health_router() -> Router {
    Router::new().route("/health", get(health))
}

async fn health() -> &'static str {
    "OK"
}
