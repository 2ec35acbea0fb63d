//! Food Production Management Platform - Backend Server

use std::{net::SocketAddr, sync::Arc};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fpm_backend::store::{DocumentStore, HttpStore, MemoryStore};
use fpm_backend::{create_app, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fpm_server=debug,fpm_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting Food Production Management Server");
    tracing::info!("Environment: {}", config.environment);

    // Connect the document store
    let store: Arc<dyn DocumentStore> = match config.store.mode.as_str() {
        "http" => {
            tracing::info!("Using JSON document store at {}", config.store.base_url);
            Arc::new(HttpStore::new(
                config.store.base_url.clone(),
                config.store.timeout_seconds,
            )?)
        }
        _ => {
            tracing::info!("Using in-memory document store");
            Arc::new(MemoryStore::new())
        }
    };

    let port = config.server.port;
    let state = AppState::new(store, config);

    // Build application
    let app = create_app(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
