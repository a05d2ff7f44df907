//! HTTP API server

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::service::PollutionService;

pub mod handlers;
pub mod state;
pub mod validation;

pub use state::AppState;

/// Build the API router using the provided application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/pollution-data", post(handlers::pollution_data))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Convenience helper for an already-wired service
pub fn create_service_router(service: Arc<PollutionService>) -> Router {
    create_router(AppState::new(service))
}
