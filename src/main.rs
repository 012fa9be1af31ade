//! Server binary for the wine cellar backend.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cellar_backend::config::Config;
use cellar_backend::upstream::RecordStore;
use cellar_backend::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Wine Cellar Backend");
    tracing::info!("Upstream table: {}", config.table_url());
    tracing::info!("Bind address: {}", config.bind_addr);

    // Warn about missing upstream settings; requests will be rejected upstream
    if config.api_token.is_none() {
        tracing::warn!("No upstream API token configured (CELLAR_API_TOKEN)");
    }
    if config.base_id.is_empty() {
        tracing::warn!("No upstream base id configured (CELLAR_BASE_ID)");
    }

    let config = Arc::new(config);
    let store = Arc::new(RecordStore::new(config.clone()));

    // Create application state
    let state = AppState {
        store,
        config: config.clone(),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
