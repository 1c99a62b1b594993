//! Core types for the biomechanics inference service.
//!
//! Holds the wire-level request/response shapes shared by the gateway and the
//! video/analysis crates, plus the service-wide error enum.

pub mod error;
pub mod types;

pub use error::VideoError;
pub use types::{
    AnalyzeRequest, AnalyzeResponse, DebugInfo, FrameRequest, FrameResponse, JointAngles,
    PhaseReport, TimingWindow,
};
