//! Harvest API Server
//!
//! Ingests a wildlife harvest report once at startup and serves it as JSON.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use harvest_api::config::{Args, ServiceConfig};
use harvest_api::state::AppState;
use harvest_api::{metrics, server};

fn main() {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(threads) = args.worker_threads {
        runtime_builder.worker_threads(threads);
    }

    let runtime = match runtime_builder.build() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to create Tokio runtime: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = runtime.block_on(run_server(args)) {
        error!(error = %format!("{:#}", e), "Harvest API failed");
        std::process::exit(1);
    }
}

async fn run_server(args: Args) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .json()
        .init();

    info!("Starting harvest API server");

    let config = ServiceConfig::from_args(&args)?;

    if let Some(addr) = config.metrics_listen {
        metrics::install_exporter(addr)?;
    }

    // Ingest completes before the listener is bound
    let state = AppState::load(&config.report)
        .with_context(|| format!("Failed to ingest {}", config.report.path.display()))?;

    info!(
        source = %state.source.display(),
        units = state.collection.unit_count(),
        records = state.collection.record_count(),
        sections_skipped = state.summary.sections_skipped,
        "Harvest report loaded"
    );

    server::start_server(Arc::new(state), config.listen).await
}
