//! `POST /analyze` — download, probe, and return the mock report.

use axum::{
    extract::State,
    response::Json,
};
use biomech_core::{AnalyzeRequest, AnalyzeResponse};
use tracing::{error, info};

use crate::error::ApiError;
use crate::server::AppState;

/// Fetch the video, probe its duration, and assemble the canned analysis.
///
/// Fetch and decode failures both collapse to 500; the generator itself
/// cannot fail.
pub async fn analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    info!(url = %req.video_url, phases = req.phases.len(), "Analyzing video");

    let probed = biomech_video::probe_url(&state.http, &req.video_url)
        .await
        .map_err(|e| {
            error!(error = %e, url = %req.video_url, "Analysis failed");
            ApiError::analysis(e)
        })?;

    let report = biomech_analysis::generate(&req.phases, req.focus.as_deref(), probed.duration_ms);
    Ok(Json(report))
}
