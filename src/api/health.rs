//! Liveness endpoint

use axum::http::StatusCode;
use serde::Serialize;

use crate::api::types::Json;

/// Liveness response body
#[derive(Serialize)]
pub struct LivenessResponse {
    pub message: String,
}

/// GET / - returns 200 while the service is running
pub async fn live_check() -> (StatusCode, Json<LivenessResponse>) {
    let response = LivenessResponse {
        message: "API está rodando...".to_string(),
    };

    (StatusCode::OK, Json(response))
}
