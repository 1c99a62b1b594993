//! HTTP server wiring: shared state, router, and the serve loop.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tracing::info;

use crate::{analyze_api, frame_api, health_api};

/// State shared across request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Shared HTTP client used for video downloads.
    pub http: reqwest::Client,
    /// Directory extracted frames are written to.
    pub frames_dir: Arc<PathBuf>,
}

impl AppState {
    pub fn new(frames_dir: PathBuf) -> Self {
        Self {
            http: reqwest::Client::new(),
            frames_dir: Arc::new(frames_dir),
        }
    }
}

/// Build the Axum router with all API routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_api::health))
        .route("/analyze", post(analyze_api::analyze))
        .route("/frame", post(frame_api::extract_frame))
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn start_server(addr: SocketAddr, state: AppState) -> Result<()> {
    let app = build_router(state);

    info!("Inference HTTP server listening on {}", addr);
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
