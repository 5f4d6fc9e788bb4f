//! Progress Badge API Server
//!
//! Serves SVG progress badges at `/<anything>/<value>`.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use progress_api::config::ServiceConfig;
use progress_api::state::AppState;

/// Progress Badge API Server
#[derive(Parser, Debug)]
#[command(name = "progress-api")]
#[command(about = "HTTP server rendering SVG progress badges")]
struct Args {
    /// Listen host
    #[arg(long, default_value = "0.0.0.0", env = "BADGE_HOST")]
    host: String,

    /// Listen port
    #[arg(short, long, default_value_t = 8080, env = "PORT")]
    port: u16,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Number of worker threads
    #[arg(long, env = "BADGE_WORKER_THREADS")]
    worker_threads: Option<usize>,

    /// Optional YAML config file
    #[arg(short, long, env = "BADGE_CONFIG")]
    config: Option<PathBuf>,
}

fn main() {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .json()
        .init();

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(threads) = args.worker_threads {
        info!("Configuring tokio runtime with {} worker threads", threads);
        runtime_builder.worker_threads(threads);
    }

    let result = runtime_builder
        .build()
        .context("Failed to create Tokio runtime")
        .and_then(|runtime| runtime.block_on(run_server(args)));

    if let Err(e) = result {
        error!("Progress API failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server(args: Args) -> Result<()> {
    info!("Starting progress badge API server");

    let config = ServiceConfig::load(args.config.as_deref())?;

    let prometheus_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .context("Failed to install Prometheus recorder")?;

    // The template is compiled exactly once, here.
    let state = Arc::new(AppState::new(&config)?.with_prometheus(prometheus_handle));

    let app = progress_api::router(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .with_context(|| format!("Invalid listen address {}:{}", args.host, args.port))?;

    info!(address = %addr, "Listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server failed")?;

    Ok(())
}
