mod catalog;
mod config;
mod controller;
mod errors;
mod models;
mod status;
mod transport;
mod validate;

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::transport::ApiClient;

/// Smoke tool: loads config, pings the backend and reports the catalog size.
/// The form logic itself lives in the modules above and is exercised by the
/// presentation layer embedding them (and by the tests).
#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Talvyn forms client v{}", env!("CARGO_PKG_VERSION"));
    info!("API base: {}", config.api_base_url);
    info!("{} open positions in the catalog", catalog::OPENINGS.len());

    let api = ApiClient::new(&config);
    match api.health().await {
        Ok(health) => info!("Backend {} at {}", health.status, health.timestamp),
        Err(e) => warn!("Backend health check failed: {e}"),
    }

    Ok(())
}
