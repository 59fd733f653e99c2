use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_key: String,
    pub api_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let api_key = env::var("API_KEY").unwrap_or_else(|_| "".to_string());
        let api_base_url =
            env::var("API_BASE_URL").unwrap_or_else(|_| "https://api.openai.com".to_string());

        Self {
            api_key,
            api_base_url,
        }
    }
}
