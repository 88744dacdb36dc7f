//! centex-exporter
//!
//! Polls a Centrifugo node's admin API on every Prometheus scrape and serves
//! the values on the telemetry path (default `/metrics`).

use std::net::SocketAddr;
use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;
use tracing_subscriber::{fmt, EnvFilter};

use centex_core::error::ConfigError;
use centex_exporter::{app_state, cli::Cli, router};

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "centex-exporter stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), StartupError> {
    let cfg = cli.resolve()?;
    let listen = cfg.web.listen_addr()?;
    let telemetry_path = cfg.web.telemetry_path.clone();

    let state = app_state::AppState::new(cfg)?;
    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|source| StartupError::Bind { addr: listen, source })?;

    tracing::info!(
        %listen,
        %telemetry_path,
        version = env!("CARGO_PKG_VERSION"),
        "centex-exporter listening"
    );
    axum::serve(listener, app).await.map_err(StartupError::Serve)
}
