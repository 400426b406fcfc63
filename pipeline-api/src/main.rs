//! pipeline-api - MERN CI/CD Pipeline Demo HTTP API
//!
//! Listen address resolution: CLI > env (`HOST`, `PORT`) > TOML config > default.

use std::net::IpAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use pipeline_api::{server, AppState, SERVICE_VERSION};
use pipeline_common::config::{ConfigOverrides, ServerConfigResolver};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for pipeline-api
#[derive(Parser, Debug)]
#[command(name = "pipeline-api")]
#[command(about = "MERN CI/CD Pipeline Demo API server")]
#[command(version)]
struct Args {
    /// Address to listen on
    #[arg(long)]
    host: Option<IpAddr>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let default_filter = "pipeline_api=info,pipeline_common=info,tower_http=info";
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting MERN CI/CD Pipeline Demo API (pipeline-api) v{} [{}] built {} ({})",
        SERVICE_VERSION,
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();

    let resolver = ServerConfigResolver::new(ConfigOverrides {
        host: args.host,
        port: args.port,
        config_file: args.config,
    });
    let config = match resolver.resolve() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to resolve configuration: {}", e);
            return Err(e.into());
        }
    };

    // Uptime is measured from here
    let state = AppState::new();

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("pipeline-api listening on http://{}", addr);
    info!("Health check: http://{}/api/health", addr);

    server::run(listener, state, server::shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}
