//! Startup orchestration.
//!
//! # Responsibilities
//! - Validate configuration
//! - Start metrics when enabled
//! - Bind the listener and serve until shutdown
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - The listener binds last, so traffic only arrives when ready

use std::net::SocketAddr;
use std::sync::Arc;

use thiserror::Error;

use crate::config::loader::ConfigError;
use crate::config::validation::validate_config;
use crate::config::RelayConfig;
use crate::http::HttpServer;
use crate::lifecycle::Shutdown;
use crate::net::{self, ListenerError};
use crate::observability::metrics;

/// Fatal errors raised before or while serving.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Listener(#[from] ListenerError),

    #[error("Failed to start metrics exporter: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Run the relay until a termination signal arrives.
pub async fn run(config: RelayConfig) -> Result<(), StartupError> {
    let shutdown = Arc::new(Shutdown::new());
    shutdown.trigger_on_signal();
    serve(config, &shutdown).await
}

/// Validate, bind and serve; returns once `shutdown` is triggered.
pub async fn serve(config: RelayConfig, shutdown: &Shutdown) -> Result<(), StartupError> {
    validate_config(&config).map_err(ConfigError::Validation)?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.url,
        cors = ?config.cors.policy,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        // Validated above.
        if let Ok(addr) = config.observability.metrics_address.parse::<SocketAddr>() {
            metrics::init_metrics(addr)?;
        }
    }

    if shutdown.is_triggered() {
        tracing::info!("Shutdown already requested, not binding");
        return Ok(());
    }

    let listener = net::bind(&config.listener).await?;
    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
