pub mod analysis;
pub mod api;
pub mod config;
pub mod core_state;
pub mod db;
pub mod knowledge;
pub mod models;
pub mod pipeline;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

/// Start the service and block until Ctrl-C.
pub async fn run() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let app_config = config::AppConfig::from_env();
    let bind = app_config.bind;

    // Opens SQLite and builds the blocking HTTP client.
    let core = tokio::task::spawn_blocking(move || core_state::CoreState::from_config(app_config))
        .await
        .map_err(|e| format!("Startup task failed: {e}"))?;

    api::serve(Arc::new(core), bind).await
}
