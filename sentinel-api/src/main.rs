//! sentinel-api - Fake News Sentinel classification service
//!
//! Loads the TF-IDF vectorizer and linear classifier, then serves
//! `POST /predict` on localhost:5000 unless configured otherwise.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use sentinel_api::{build_router, AppState, InferenceService, DEFAULT_PORT};
use sentinel_common::config::ArtifactDirResolver;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for sentinel-api
#[derive(Parser, Debug)]
#[command(name = "sentinel-api")]
#[command(about = "Fake news classification service")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT, env = "SENTINEL_PORT")]
    port: u16,

    /// Address to bind
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST), env = "SENTINEL_HOST")]
    host: IpAddr,

    /// Directory containing tfidf_vectorizer.json and logistic_regression_model.json
    /// (falls back to SENTINEL_ARTIFACT_DIR, the config file, then the working directory)
    #[arg(short, long)]
    artifact_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sentinel_api=info,sentinel_common=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Build identification first, before artifact loading
    info!(
        "Starting Fake News Sentinel (sentinel-api) v{} rev {} built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("SENTINEL_REVISION"),
        env!("SENTINEL_BUILT_ON"),
        if cfg!(debug_assertions) { "debug" } else { "release" }
    );

    let args = Args::parse();

    let artifact_dir = ArtifactDirResolver::new(args.artifact_dir)
        .resolve()
        .context("Failed to resolve artifact directory")?;
    info!("Artifact directory: {}", artifact_dir.display());

    // Serving without both artifacts is not an option
    let service = InferenceService::load(&artifact_dir).with_context(|| {
        format!(
            "Failed to load model artifacts from {}",
            artifact_dir.display()
        )
    })?;
    info!("✓ Model artifacts loaded");

    let app = build_router(AppState::new(service));

    let addr = SocketAddr::new(args.host, args.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("sentinel-api listening on http://{}", addr);
    info!("Predict: POST http://{}/predict", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
