pub mod health;
pub mod invoke;

use axum::{middleware as axum_middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::{middleware::invocation_id::invocation_id, state::AppState};

/// Routes exposed to the scheduler.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/invoke", get(invoke::invoke).post(invoke::invoke))
        .route("/api/health", get(health::health))
        .layer(axum_middleware::from_fn(invocation_id))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
