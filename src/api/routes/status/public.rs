//! Public types for the status API
use serde::Serialize;

/// Liveness payload served at the API root
#[derive(Serialize)]
pub struct RootResponse {
    pub message: String,
    pub status: String,
}

/// Health check payload
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}
