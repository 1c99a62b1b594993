use thiserror::Error;

/// Errors raised while fetching or decoding a remote video.
///
/// Only [`VideoError::FrameNotFound`] is user-correctable (the caller asked
/// for a timestamp the stream cannot produce); everything else is a generic
/// internal failure and surfaces as HTTP 500 at the gateway boundary.
#[derive(Debug, Error)]
pub enum VideoError {
    #[error("failed to fetch video: {0}")]
    Fetch(String),

    #[error("failed to decode video: {0}")]
    Decode(String),

    #[error("no frame at requested position: {0}")]
    FrameNotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VideoError {
    /// True when the failure is the caller's to fix (bad timestamp) rather
    /// than an internal fault.
    pub fn is_not_found(&self) -> bool {
        matches!(self, VideoError::FrameNotFound(_))
    }
}
