//! Outlay API Server
//!
//! Run with: cargo run
//!
//! # Configuration
//!
//! Loaded from `config.toml` (cwd, `~/.config/outlay/`, `/etc/outlay/`),
//! with environment variable overrides:
//! - `OUTLAY_STORE_PATH`: SQLite database file (default: platform data dir)
//! - `OUTLAY_HOST`: Host to bind to (default: 0.0.0.0)
//! - `OUTLAY_PORT`: Port to listen on (default: 5000)
//! - `OUTLAY_LOG_LEVEL`: Log level (default: info)
//! - `OUTLAY_LOG_FORMAT`: pretty or json (default: pretty)
//! - `RUST_LOG`: Fine-grained filter, takes precedence over OUTLAY_LOG_LEVEL

use outlay::api::{serve, ApiConfig, AppState};
use outlay::config::Config;
use outlay::store::{ExpenseCollection, StoreConfig};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration first so logging can honor it
    let config = Config::load_default();

    init_tracing(&config);

    tracing::info!("Starting Outlay API server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Store path: {}", config.store.path);

    // Open the document store
    let store = Arc::new(ExpenseCollection::open(StoreConfig::new(&config.store.path))?);
    tracing::info!("Document store opened");

    let api_config = ApiConfig::new(config.api.host.clone(), config.api.port);
    let state = AppState::new(store, api_config.clone());

    // Run server (blocks until shutdown signal)
    tracing::info!("Starting server on {}", api_config.addr());
    serve(state, &api_config).await?;

    tracing::info!("Outlay API server stopped");
    Ok(())
}

/// Initialize tracing according to the logging config
fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("outlay={},tower_http=debug", config.logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
