//! gp-relay
//!
//! Serves `GET /gp` by fetching the CelesTrak Starlink general-perturbations
//! feed and returning it unchanged, optionally with permissive CORS headers
//! for browser clients.
//!
//! ```text
//!   Browser ──GET/OPTIONS /gp──▶ ┌───────────────────────────────┐
//!                                │ request id → trace → [cors]   │
//!                                │          → relay handler      │──GET──▶ celestrak.com
//!   Browser ◀──── JSON bytes ─── │            (pass-through)     │◀─JSON──
//!                                └───────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use gp_relay::config::{loader::load_config, CorsPolicy, RelayConfig};
use gp_relay::lifecycle::startup;
use gp_relay::observability::logging;

#[derive(Parser)]
#[command(name = "gp-relay")]
#[command(about = "Relay the CelesTrak Starlink GP feed with CORS headers", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,

    /// Override the CORS policy (disabled | permissive).
    #[arg(long)]
    cors: Option<CorsPolicy>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("gp-relay: failed to load {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => RelayConfig::default(),
    };

    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }
    if let Some(policy) = cli.cors {
        config.cors.policy = policy;
    }

    if let Err(e) = logging::init_logging(&config.observability) {
        eprintln!("gp-relay: failed to initialise logging: {}", e);
        return ExitCode::FAILURE;
    }

    tracing::info!("gp-relay v{} starting", env!("CARGO_PKG_VERSION"));

    match startup::run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Fatal error");
            ExitCode::FAILURE
        }
    }
}
