//! API routes module

pub mod chat;
pub mod status;

use std::sync::Arc;

use crate::api::state::AppState;
use axum::Router;

type SharedState = Arc<AppState>;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Liveness and health routes
        .merge(status::router())
        // Chat relay routes
        .nest("/chat", chat::router())
}
