//! Environment configuration

use std::time::Duration;

/// Default catalog API base URL.
pub const DEFAULT_API_BASE: &str = "https://apollo.cafe/api";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub catalog_base_url: String,
    pub http_timeout: Duration,
    /// Chat platform token; absent when running the console adapter.
    pub bot_token: Option<String>,
}

impl Config {
    /// Load from the environment, falling back to defaults. A `.env`
    /// file is honored when present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let catalog_base_url = std::env::var("CATALOG_API_BASE")
            .unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let http_timeout = std::env::var("CATALOG_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        let bot_token = std::env::var("BOT_TOKEN").ok();

        Self {
            catalog_base_url,
            http_timeout,
            bot_token,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_base_url: DEFAULT_API_BASE.to_string(),
            http_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            bot_token: None,
        }
    }
}
