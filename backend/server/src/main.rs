mod config;

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use biomech_gateway::{start_server, AppState};
use config::Config;

#[derive(Parser)]
#[command(name = "biomech")]
#[command(about = "Biomechanics inference service — mock analysis over HTTP")]
#[command(version)]
struct Cli {
    /// Port to bind the HTTP server to (overrides BIOMECH_PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Address to bind to (overrides BIOMECH_BIND)
    #[arg(long)]
    bind: Option<String>,

    /// Directory extracted frames are written to (overrides BIOMECH_FRAMES_DIR)
    #[arg(long)]
    frames_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .json()
        .init();

    let cli = Cli::parse();
    let bind = cli.bind.unwrap_or(config.bind_address);
    let port = cli.port.unwrap_or(config.port);
    let frames_dir = cli.frames_dir.unwrap_or(config.frames_dir);

    let addr: SocketAddr = format!("{bind}:{port}").parse()?;
    info!(%addr, frames_dir = %frames_dir.display(), "Starting biomechanics inference service");

    let state = AppState::new(frames_dir);
    start_server(addr, state).await
}
