//! Flightcast HTTP Server Binary
//!
//! Main entry point for the flight prediction REST API. It loads the
//! configuration, opens the model artifact store, and starts serving
//! requests.
//!
//! # Usage
//!
//! ```bash
//! # Run with seasonal weather profiles (default)
//! cargo run --bin flightcast-server
//!
//! # Run with live weather enrichment
//! cargo run --bin flightcast-server --features live-weather
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (overrides the config file, default: 0.0.0.0)
//! - `PORT`: Server port (overrides the config file, default: 5050)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use flightcast::artifacts::FsArtifactStore;
use flightcast::config::{AppConfig, EnrichmentMode};
use flightcast::http::{create_router, AppState};

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
        .with_thread_ids(true)
        .init();

    info!("Starting Flightcast HTTP Server");

    // Load configuration, falling back to defaults when no file exists
    let config = match AppConfig::from_default_location() {
        Ok(config) => config,
        Err(err) => {
            info!("no config file loaded ({}); using defaults", err);
            AppConfig::default()
        }
    };

    // Open the artifact store and attempt an eager model load. A failure
    // here is not fatal; handlers retry the load on first use.
    let store = Arc::new(FsArtifactStore::open(&config.models.dir)?);
    info!(dir = %store.root().display(), "artifact store opened");

    let state = match config.enrichment_mode()? {
        EnrichmentMode::Seasonal => AppState::new(store),
        #[cfg(feature = "live-weather")]
        EnrichmentMode::Live => {
            use flightcast::weather::{NominatimGeocoder, OpenMeteoProvider, WeatherEnrichment};

            let geocoder = Arc::new(NominatimGeocoder::new()?);
            let provider = Arc::new(OpenMeteoProvider::new()?);
            info!("live weather enrichment enabled");
            AppState::new(store).with_enrichment(Arc::new(WeatherEnrichment::new(
                geocoder, provider,
            )))
        }
        #[cfg(not(feature = "live-weather"))]
        EnrichmentMode::Live => {
            warn!("live enrichment configured but the live-weather feature is not compiled in; using seasonal profiles");
            AppState::new(store)
        }
    };

    if state.context_or_reload().is_ok() {
        info!("model artifacts loaded");
    } else {
        warn!("model artifacts not available at startup; will retry on first request");
    }

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or(config.server.host);
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(config.server.port);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
