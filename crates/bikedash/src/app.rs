//! Application state and server lifecycle.

use crate::router::create_router;
use bikedash_common::DashError;
use bikedash_config::Config;
use bikedash_data::Dataset;
use bikedash_graphs::GraphManager;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Shared, read-only state passed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The loaded rental table.
    pub dataset: Arc<Dataset>,
    /// Effective configuration.
    pub config: Arc<Config>,
    /// Chart renderer.
    pub graphs: Arc<GraphManager>,
}

impl AppState {
    /// Builds the state around an already loaded dataset.
    pub fn new(config: Config, dataset: Dataset) -> Result<Self, DashError> {
        let graphs = GraphManager::from_config(&config.graphs)?;
        Ok(Self {
            dataset: Arc::new(dataset),
            config: Arc::new(config),
            graphs: Arc::new(graphs),
        })
    }

    /// Loads the configured dataset and builds the state.
    pub fn load(config: Config) -> Result<Self, DashError> {
        let dataset = Dataset::load(&config.dataset.path)?;
        Self::new(config, dataset)
    }
}

/// Binds the configured address and serves until Ctrl-C.
pub async fn serve(state: AppState) -> Result<(), DashError> {
    let address = state.config.server.bind_address();
    let listener = TcpListener::bind(address.as_str()).await?;
    info!(%address, "dashboard listening");

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("dashboard stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
    }
    info!("shutdown signal received");
}
