use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Request body for `POST /analyze`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub video_url: String,
    /// Phase names to report on. Defaults to the five canonical lift phases.
    #[serde(default = "default_phases")]
    pub phases: Vec<String>,
    /// Optional focus areas (e.g. "bar path") used to select extra
    /// recommendations.
    #[serde(default)]
    pub focus: Option<Vec<String>>,
}

fn default_phases() -> Vec<String> {
    ["setup", "pull", "transition", "receive", "recovery"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Response body for `POST /analyze`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub overview: String,
    /// Per-phase records keyed by phase name. Unrecognized requested phases
    /// contribute no entry.
    pub phases: BTreeMap<String, PhaseReport>,
    pub recommendations: Vec<String>,
    pub debug: DebugInfo,
}

/// `[start_ms, end_ms]` window within the video, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimingWindow {
    pub start_ms: f64,
    pub end_ms: f64,
}

/// Static joint angle readout attached to the pull phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JointAngles {
    pub hip: u32,
    pub knee: u32,
    pub ankle: u32,
}

/// One phase's slice of the report. The optional fields vary per phase, so
/// each serialized record carries only what that phase defines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseReport {
    pub notes: String,
    pub timing: TimingWindow,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_points: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angles: Option<JointAngles>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bar_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stability: Option<String>,
}

/// Diagnostic block echoed back with every analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugInfo {
    pub duration_ms: f64,
    pub analysis_version: String,
    pub model: String,
    pub focus_areas: Vec<String>,
}

/// Request body for `POST /frame`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameRequest {
    pub video_url: String,
    /// Millisecond offset into the video.
    pub ms: i64,
}

/// Response body for `POST /frame`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameResponse {
    pub timestamp_ms: i64,
    pub frame_path: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn analyze_request_defaults_to_canonical_phases() {
        let req: AnalyzeRequest =
            serde_json::from_value(json!({"video_url": "http://example.com/lift.mp4"})).unwrap();
        assert_eq!(
            req.phases,
            vec!["setup", "pull", "transition", "receive", "recovery"]
        );
        assert!(req.focus.is_none());
    }

    #[test]
    fn analyze_request_accepts_explicit_phases_and_focus() {
        let req: AnalyzeRequest = serde_json::from_value(json!({
            "video_url": "http://example.com/lift.mp4",
            "phases": ["pull"],
            "focus": ["bar path"]
        }))
        .unwrap();
        assert_eq!(req.phases, vec!["pull"]);
        assert_eq!(req.focus.as_deref(), Some(&["bar path".to_string()][..]));
    }

    #[test]
    fn phase_report_omits_absent_fields() {
        let report = PhaseReport {
            notes: "Stable base".into(),
            timing: TimingWindow {
                start_ms: 0.0,
                end_ms: 150.0,
            },
            key_points: Some(vec!["foot placement".into()]),
            angles: None,
            bar_path: None,
            depth: None,
            stability: None,
        };
        let v = serde_json::to_value(&report).unwrap();
        assert!(v.get("key_points").is_some());
        assert!(v.get("angles").is_none());
        assert!(v.get("bar_path").is_none());
    }
}
