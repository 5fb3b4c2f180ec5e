//! Layout Showcase Server
//!
//! Serves the map layout showcase: landing page, composed map layers and
//! demo plots for clicked features.

use anyhow::Result;
use clap::Parser;
use std::{net::SocketAddr, sync::Arc};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use layout_showcase::config::ShowcaseConfig;
use layout_showcase::state::AppState;

/// Layout Showcase Server
#[derive(Parser, Debug)]
#[command(name = "layout-showcase")]
#[command(about = "Map layout showcase server")]
struct Args {
    /// Listen address
    #[arg(short, long, default_value = "0.0.0.0:8000", env = "LAYOUT_LISTEN_ADDR")]
    listen: String,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Number of worker threads
    #[arg(long, env = "LAYOUT_WORKER_THREADS")]
    worker_threads: Option<usize>,

    /// YAML file holding app settings and layout overrides
    #[arg(long, default_value = "config/layout-showcase.yaml", env = "LAYOUT_CONFIG")]
    config: String,

    /// App workspace directory with bundled resources
    #[arg(long, default_value = "workspaces/app_workspace", env = "LAYOUT_WORKSPACE")]
    workspace: String,
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Build runtime with configured threads
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(threads) = args.worker_threads {
        runtime_builder.worker_threads(threads);
    }

    let runtime = runtime_builder.build()?;
    runtime.block_on(run_server(args))
}

async fn run_server(args: Args) -> Result<()> {
    // Initialize tracing
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .json()
        .init();

    // Initialize Prometheus metrics exporter
    let prometheus_handle = metrics_exporter_prometheus::PrometheusBuilder::new().install_recorder()?;

    info!("Starting layout showcase server");

    let config = ShowcaseConfig::load_from_file(&args.config)?;
    let state = Arc::new(AppState::new(
        config,
        &args.workspace,
        Some(prometheus_handle),
    )?);

    let app = layout_showcase::build_router(state);

    // Parse listen address
    let addr: SocketAddr = args.listen.parse()?;
    info!(address = %addr, "Listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
