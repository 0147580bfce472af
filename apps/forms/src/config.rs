use std::time::Duration;

use anyhow::{Context, Result};

/// Fallback API origin when `TALVYN_API_BASE_URL` is unset.
pub const DEFAULT_API_BASE_URL: &str = "https://talvyntechnologies.com";

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_RESUME_MAX_MB: u64 = 5;
const DEFAULT_STATUS_DISPLAY_SECS: u64 = 5;

/// Client configuration loaded once from environment variables at startup.
/// Every value has a default, so `from_env` only fails on unparseable input.
#[derive(Debug, Clone)]
pub struct Config {
    /// API origin, no trailing slash. Injected into the transport client at
    /// construction; nothing reads it ad hoc afterwards.
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    /// Ceiling on resume attachment size, in bytes.
    pub resume_ceiling_bytes: u64,
    /// How long a success/error banner stays up before reverting to idle.
    pub status_display_secs: u64,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            api_base_url: std::env::var("TALVYN_API_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
            request_timeout_secs: env_u64("REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?,
            resume_ceiling_bytes: env_u64("RESUME_MAX_MB", DEFAULT_RESUME_MAX_MB)? * 1024 * 1024,
            status_display_secs: env_u64("STATUS_DISPLAY_SECS", DEFAULT_STATUS_DISPLAY_SECS)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn status_display_window(&self) -> Duration {
        Duration::from_secs(self.status_display_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            resume_ceiling_bytes: DEFAULT_RESUME_MAX_MB * 1024 * 1024,
            status_display_secs: DEFAULT_STATUS_DISPLAY_SECS,
            rust_log: "info".to_string(),
        }
    }
}

fn env_u64(key: &str, default: u64) -> Result<u64> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<u64>()
            .with_context(|| format!("Environment variable '{key}' must be a positive integer")),
        Err(_) => Ok(default),
    }
}
