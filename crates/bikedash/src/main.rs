//! Main entry point for the bike sharing dashboard.

use anyhow::{anyhow, Context, Result};
use bikedash::{serve, AppState};
use bikedash_common::{init_logging, LoggingConfig};
use bikedash_config::ConfigLoader;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ConfigLoader::load().context("Failed to load configuration")?;

    // Keep the guard alive so buffered file logs are flushed on exit
    let _guard = init_logging(&LoggingConfig::from(&config.logging))
        .map_err(|e| anyhow!(e))
        .context("Failed to initialize logging")?;

    info!("Starting bike sharing dashboard");

    let dataset_path = config.dataset.path.clone();
    let state = match AppState::load(config) {
        Ok(state) => state,
        Err(e) => {
            error!(path = %dataset_path, error = %e, "Dataset could not be loaded");
            return Err(e).context("Startup aborted");
        }
    };

    if let Err(e) = serve(state).await {
        error!(error = %e, "Server failed");
        return Err(e.into());
    }

    Ok(())
}
