//! Test utilities for integration tests
use std::sync::Arc;

use axum::{Router, body::Body};

use signcrypt_relay::api::AppState;
use signcrypt_relay::api::app;
use signcrypt_relay::core::AppConfig;

/// Creates a test application router pointed at a stub completion
/// API, usually a `mockito` server URL.
pub fn test_app(api_base_url: &str) -> Router {
    let app_config = AppConfig {
        api_key: String::from("test-api-key"),
        api_base_url: api_base_url.to_string(),
    };
    let app_state = AppState::new(app_config);
    app(Arc::new(app_state))
}

/// Collect a response body into a string
pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read response body");
    String::from_utf8(bytes.to_vec()).expect("Response body was not valid utf-8")
}
