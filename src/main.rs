//! Prayer Gateway - a caching retrieval service for generated prayers
//!
//! Fronts a slow, costly generation API with a bounded TTL/LRU cache and
//! a resilient fetch orchestrator.

mod api;
mod cache;
mod config;
mod error;
mod generate;
mod models;
mod orchestrator;
mod persist;

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::signal;
use tokio::sync::RwLock;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::{create_router, AppState};
use cache::PrayerCache;
use config::Config;
use generate::HttpGenerator;
use orchestrator::{PrayerFetcher, RetryPolicy};
use persist::SnapshotStore;

/// Main entry point for the prayer gateway.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Build the cache (restoring a snapshot if a path is configured)
/// 4. Wire the upstream generator and fetch orchestrator
/// 5. Create the Axum router with all endpoints
/// 6. Start the HTTP server with graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "prayer_gateway=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Prayer Gateway");

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: max_entries={}, ttl={}s, max_attempts={}, port={}",
        config.max_entries, config.ttl_seconds, config.max_attempts, config.server_port
    );

    // Build the cache, restoring persisted entries when configured
    let cache = match &config.snapshot_path {
        Some(path) => PrayerCache::with_snapshot(
            config.max_entries,
            config.ttl_seconds,
            SnapshotStore::new(path),
        ),
        None => PrayerCache::new(config.max_entries, config.ttl_seconds),
    };
    info!(entries = cache.len(), "Cache initialized");

    // Wire the upstream generator and the fetch orchestrator
    let generator = Arc::new(HttpGenerator::new(config.generator_url.clone()));
    let policy = RetryPolicy::new(
        config.max_attempts,
        config.retry_base_delay_ms,
        config.retry_max_delay_ms,
    );
    let fetcher = PrayerFetcher::new(Arc::new(RwLock::new(cache)), generator, policy);
    let state = AppState::new(fetcher);

    // Create router with all endpoints
    let app = create_router(state);

    // Bind to configured port
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
