//! `POST /frame` — download and extract a single frame as a JPEG.

use axum::{
    extract::State,
    response::Json,
};
use biomech_core::{FrameRequest, FrameResponse};
use tracing::{error, info};

use crate::error::ApiError;
use crate::server::AppState;

/// Decode the frame at the requested millisecond offset and write it under
/// the configured frames directory. The written file is left for the caller
/// to collect.
pub async fn extract_frame(
    State(state): State<AppState>,
    Json(req): Json<FrameRequest>,
) -> Result<Json<FrameResponse>, ApiError> {
    info!(url = %req.video_url, ms = req.ms, "Extracting frame");

    let frame_path =
        biomech_video::extract_frame_url(&state.http, &req.video_url, req.ms, &state.frames_dir)
            .await
            .map_err(|e| {
                error!(error = %e, url = %req.video_url, ms = req.ms, "Frame extraction failed");
                ApiError::frame(e)
            })?;

    Ok(Json(FrameResponse {
        timestamp_ms: req.ms,
        frame_path: frame_path.display().to_string(),
        message: format!("Frame extracted at {}ms", req.ms),
    }))
}
