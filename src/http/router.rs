//! HTTP Router Configuration
//!
//! Wires handlers to routes and applies the middleware stack.

use axum::routing::{get, post};
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers;
use super::state::AppState;

/// Create the application router with all endpoints and middleware
pub fn create_router(state: AppState) -> Router {
    // Permissive CORS so browser frontends can call the API directly.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Prediction
        .route("/predict", post(handlers::predict))
        // Encoder vocabularies
        .route("/airlines", get(handlers::list_airlines))
        .route("/cities", get(handlers::list_cities))
        // Liveness
        .route("/health", get(handlers::health_check))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
