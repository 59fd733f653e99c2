//! Router for the liveness and health check API

use std::sync::Arc;

use axum::{Json, Router, routing::get};

use super::public;
use crate::api::state::AppState;

type SharedState = Arc<AppState>;

pub const SERVICE_NAME: &str = "SignCrypt AI";

/// Static liveness payload. No side effects.
async fn root() -> Json<public::RootResponse> {
    Json(public::RootResponse {
        message: format!("{} Chatbot API", SERVICE_NAME),
        status: "active".to_string(),
    })
}

/// Static health check payload. No side effects.
async fn health_check() -> Json<public::HealthResponse> {
    Json(public::HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
    })
}

/// Create the status router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
}
