//! Versioned API endpoints
//!
//! The version segment changes whenever the request/response shapes do.

pub mod usuarios;

use axum::{
    routing::{delete, get, post},
    Router,
};

use super::state::AppState;

/// Create v1 API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/usuarios", get(usuarios::list_usuarios))
        .route("/usuarios", post(usuarios::create_usuario))
        .route("/usuarios/{id}", get(usuarios::get_usuario))
        .route("/usuarios/{id}", delete(usuarios::delete_usuario))
}
