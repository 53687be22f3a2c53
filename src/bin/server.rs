//! PFT HTTP Server Binary
//!
//! Main entry point for the Political Freedom & Terrorism dashboard API.
//! It loads the dataset, runs the clustering pipeline once, and serves the
//! chart endpoints consumed by the frontend.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin pft-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: from pft.toml, else 0.0.0.0)
//! - `PORT`: Server port (default: from pft.toml, else 8080)
//! - `PFT_DATA_PATH`: Dataset CSV path (overrides pft.toml)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use pft_rust::config::{AppConfig, ConfigError};
use pft_rust::dataset::{DatasetStore, PipelineConfig};
use pft_rust::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting PFT HTTP Server");

    // Load configuration; fall back to defaults when no pft.toml exists.
    let config = match AppConfig::from_default_location() {
        Ok(config) => config,
        Err(ConfigError::NotFound) => AppConfig::default(),
        Err(e) => return Err(e).context("failed to load configuration"),
    };

    let data_path = env::var("PFT_DATA_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| config.data.path.clone());

    // Run the full pipeline once; load or preparation errors are fatal and
    // must surface before any chart is served.
    let store = DatasetStore::new();
    let pipeline = PipelineConfig {
        seed: config.data.seed,
        strict_standardization: config.data.strict_standardization,
    };
    let dataset = store
        .load(&data_path, &pipeline)
        .with_context(|| format!("failed to load dataset from {}", data_path.display()))?;

    info!(
        "Dataset ready: {} rows, years {}-{}, {} countries",
        dataset.rows.len(),
        dataset.year_min,
        dataset.year_max,
        dataset.countries.len()
    );

    // Create application state and router
    let state = AppState::new(dataset);
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| config.server.host.clone());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(config.server.port);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
