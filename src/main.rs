//! Gateway binary entry point
//!
//! Reads configuration from the environment, opens the connection pool,
//! bootstraps the schema, and serves the router until the process exits.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use harvest_gateway::gateway::{build_router, AppState, GatewayConfig, SqliteGatewayStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = GatewayConfig::from_env()?;

    let store = SqliteGatewayStore::connect(&config.database_url).await?;
    store.initialize().await?;

    let state = AppState {
        store: Arc::new(store),
        user_scoping: config.user_scoping,
    };
    let router = build_router(state, config.cors_allowed_origin.as_deref());

    let listener = TcpListener::bind(config.socket_addr()).await?;
    info!("Server running on port {}", config.port);
    axum::serve(listener, router).await?;

    Ok(())
}
