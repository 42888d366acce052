use axum::{middleware, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::health;
use super::middleware::logging_middleware;
use super::state::AppState;
use super::v1;

/// CORS layer allowing every origin, method, and header on all routes
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Liveness endpoint
        .route("/", get(health::live_check))
        // Versioned user API
        .nest("/v1", v1::create_v1_router())
        // Add state and middleware
        .with_state(state)
        .layer(middleware::from_fn(logging_middleware))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}
