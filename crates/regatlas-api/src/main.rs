//! # regatlas-api entry point
//!
//! Resolves configuration from the environment, performs the startup
//! document loads, and serves the application.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use regatlas_api::config::ApiConfig;
use regatlas_api::{app, bootstrap};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("regatlas_api=debug,info")),
        )
        .init();

    let config = ApiConfig::from_env();
    tracing::info!(
        data = %config.data_source,
        metadata = %config.metadata_source,
        map = %config.map_source,
        "loading atlas documents"
    );

    let state = bootstrap::load_state(&config).await;

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!(%addr, countries = state.dataset.len(), "regatlas-api listening");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
