use crate::core::AppConfig;

/// Process-wide state shared across requests. Read-only after
/// construction: the `reqwest::Client` is built once at startup and
/// reused for every outbound completion call.
pub struct AppState {
    pub http: reqwest::Client,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }
}
