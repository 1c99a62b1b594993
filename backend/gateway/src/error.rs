//! Handler-boundary error mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use biomech_core::VideoError;
use serde_json::json;

/// Error rendered to the caller as `{"detail": "..."}` with an HTTP status.
///
/// Only a missing frame is the caller's fault (400); every other failure in a
/// handler collapses to 500 with the underlying message embedded.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    /// Wrap a failure from the `/analyze` pipeline.
    pub fn analysis(err: VideoError) -> Self {
        Self {
            status: status_for(&err),
            detail: format!("Analysis failed: {err}"),
        }
    }

    /// Wrap a failure from the `/frame` pipeline.
    pub fn frame(err: VideoError) -> Self {
        if err.is_not_found() {
            Self {
                status: StatusCode::BAD_REQUEST,
                detail: "Could not extract frame at specified timestamp".to_string(),
            }
        } else {
            Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                detail: format!("Frame extraction failed: {err}"),
            }
        }
    }
}

fn status_for(err: &VideoError) -> StatusCode {
    if err.is_not_found() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}
