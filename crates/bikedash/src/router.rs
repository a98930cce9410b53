//! Router configuration for the dashboard.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::app::AppState;
use crate::handlers;

/// Create the application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/dashboard", get(handlers::api_dashboard))
        .route("/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
