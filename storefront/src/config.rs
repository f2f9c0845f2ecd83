//! Engine configuration

use std::time::Duration;

/// Storefront configuration, environment-driven with defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the redb database file
    pub work_dir: String,
    /// Generative Language API base URL
    pub gemini_api_url: String,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub request_timeout_ms: u64,
    /// Simulated checkout processing latency
    pub checkout_delay_ms: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/daily-brew".into()),
            gemini_api_url: std::env::var("GEMINI_API_URL")
                .unwrap_or_else(|_| "https://generativelanguage.googleapis.com/v1beta".into()),
            gemini_api_key: std::env::var("GEMINI_API_KEY").unwrap_or_default(),
            gemini_model: std::env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-2.0-flash".into()),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30_000),
            checkout_delay_ms: std::env::var("CHECKOUT_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(2_000),
        }
    }

    pub fn checkout_delay(&self) -> Duration {
        Duration::from_millis(self.checkout_delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}
