use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use jobboard::config::Config;
use jobboard::jobs::SystemClock;
use jobboard::routes::build_router;
use jobboard::state::AppState;
use jobboard::{feed, storage};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Job Board v{}", env!("CARGO_PKG_VERSION"));

    // Static job feed
    let feed = feed::from_source(&config.job_feed, config.feed_timeout)?;
    info!("Job feed source: {}", feed.source());

    // Visitor storage
    let store = storage::connect(&config.storage_url).await?;
    info!("Storage backend: {}", config.storage_url);

    let state = AppState {
        config: config.clone(),
        feed,
        store,
        clock: Arc::new(SystemClock),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
