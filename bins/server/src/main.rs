//! Abaco report server
//!
//! Main entry point for the tally count report service.

use std::net::UdpSocket;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use abaco_api::{AppState, create_router};
use abaco_core::report::ReportGenerator;
use abaco_core::storage::{ArtifactStore, StorageProvider};
use abaco_shared::AppConfig;
use abaco_shared::config::StorageSettings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "abaco=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().context("failed to load configuration")?;

    // Create artifact store
    let provider = storage_provider(&config.storage)?;
    let store = ArtifactStore::from_provider(&provider)?;
    info!(
        provider = store.provider_name(),
        location = provider.bucket(),
        "Artifact store configured"
    );

    // Create application state
    let state = AppState {
        reports: Arc::new(ReportGenerator::new(
            Arc::new(store),
            config.storage.logo_key.clone(),
        )),
    };

    // Create router
    let app = create_router(state, &config.server.static_dir);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);
    info!(
        "Access from any device on the LAN: http://{}:{}",
        local_ip(),
        config.server.port
    );
    info!("Local access: http://localhost:{}", config.server.port);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the storage provider from the configured backend.
fn storage_provider(settings: &StorageSettings) -> anyhow::Result<StorageProvider> {
    match settings.backend.as_str() {
        "local" => Ok(StorageProvider::local_fs(&settings.root)),
        "s3" => Ok(StorageProvider::s3(
            settings
                .endpoint
                .clone()
                .context("storage.endpoint required for the s3 backend")?,
            settings
                .bucket
                .clone()
                .context("storage.bucket required for the s3 backend")?,
            settings
                .access_key_id
                .clone()
                .context("storage.access_key_id required for the s3 backend")?,
            settings
                .secret_access_key
                .clone()
                .context("storage.secret_access_key required for the s3 backend")?,
            settings
                .region
                .clone()
                .context("storage.region required for the s3 backend")?,
        )),
        other => anyhow::bail!("unknown storage backend: {other}"),
    }
}

/// Best-effort LAN address discovery for the startup banner.
///
/// Opens a UDP socket toward a public address to learn which local
/// interface routes outward; no packet is actually sent.
fn local_ip() -> String {
    UdpSocket::bind("0.0.0.0:0")
        .and_then(|socket| {
            socket.connect("8.8.8.8:80")?;
            socket.local_addr()
        })
        .map_or_else(|_| "localhost".to_string(), |addr| addr.ip().to_string())
}
