//! Assembles the canned analysis report.

use std::collections::BTreeMap;

use biomech_core::{AnalyzeResponse, DebugInfo, JointAngles, PhaseReport};

use crate::phase::Phase;

const MODEL_ID: &str = "mock_analysis";

const OVERVIEW: &str = "Technical clean with good timing. Main area for improvement: \
    bar path during second pull. Strong receiving position and recovery.";

/// Build the full mock report for the requested phases.
///
/// Deterministic in all inputs. Phase names that don't match a known
/// [`Phase`] are skipped without error, so an all-unknown request yields an
/// empty phase map and still succeeds.
pub fn generate(phases: &[String], focus: Option<&[String]>, duration_ms: f64) -> AnalyzeResponse {
    let mut phase_reports = BTreeMap::new();
    for name in phases {
        if let Some(phase) = Phase::parse(name) {
            phase_reports.insert(phase.name().to_string(), phase_report(phase, duration_ms));
        }
    }

    // Insights are computed but intentionally not part of the response
    // payload; surfacing them is pending a product decision.
    let _insights = focus_insights(focus);

    AnalyzeResponse {
        overview: OVERVIEW.to_string(),
        phases: phase_reports,
        recommendations: recommendations(focus),
        debug: DebugInfo {
            duration_ms,
            analysis_version: env!("CARGO_PKG_VERSION").to_string(),
            model: MODEL_ID.to_string(),
            focus_areas: focus.map(<[String]>::to_vec).unwrap_or_default(),
        },
    }
}

fn phase_report(phase: Phase, duration_ms: f64) -> PhaseReport {
    let timing = phase.window(duration_ms);
    match phase {
        Phase::Setup => PhaseReport {
            notes: "Stable base, neutral spine position".into(),
            timing,
            key_points: Some(static_points(&["foot placement", "grip width", "starting position"])),
            angles: None,
            bar_path: None,
            depth: None,
            stability: None,
        },
        Phase::Pull => PhaseReport {
            notes: "Good initial drive, slight forward drift detected".into(),
            timing,
            key_points: None,
            angles: Some(JointAngles {
                hip: 145,
                knee: 120,
                ankle: 85,
            }),
            bar_path: Some("slightly forward".into()),
            depth: None,
            stability: None,
        },
        Phase::Transition => PhaseReport {
            notes: "Quick under-bar movement, good timing".into(),
            timing,
            key_points: Some(static_points(&["turnover speed", "elbow position"])),
            angles: None,
            bar_path: None,
            depth: None,
            stability: None,
        },
        Phase::Receive => PhaseReport {
            notes: "Solid catch position, stable front rack".into(),
            timing,
            key_points: None,
            angles: None,
            bar_path: None,
            depth: Some("full squat".into()),
            stability: Some("good".into()),
        },
        Phase::Recovery => PhaseReport {
            notes: "Controlled stand, maintained front rack position".into(),
            timing,
            key_points: Some(static_points(&["knee drive", "core stability"])),
            angles: None,
            bar_path: None,
            depth: None,
            stability: None,
        },
    }
}

/// Per-focus-area insight strings. Unrecognized areas are ignored.
fn focus_insights(focus: Option<&[String]>) -> Vec<String> {
    let mut insights = Vec::new();
    if let Some(areas) = focus {
        for area in areas {
            match area.as_str() {
                "bar path" => {
                    insights.push("Bar drifts 2-3cm forward during second pull".to_string())
                }
                "receive" => {
                    insights.push("Catch position shows good mobility and timing".to_string())
                }
                _ => {}
            }
        }
    }
    insights
}

fn recommendations(focus: Option<&[String]>) -> Vec<String> {
    let mut recs = vec![
        "Focus on keeping bar closer during second pull - practice tall cleans".to_string(),
        "Work on lat engagement to prevent forward drift".to_string(),
        "Continue front squat mobility work for deeper receiving position".to_string(),
        "Add pause cleans to improve turnover timing".to_string(),
    ];
    if focus.is_some_and(|areas| areas.iter().any(|a| a == "bar path")) {
        recs.insert(
            0,
            "Priority: Fix bar path with sweep drills and lat activation".to_string(),
        );
    }
    recs
}

fn static_points(points: &[&str]) -> Vec<String> {
    points.iter().map(|p| p.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    const DEFAULT_PHASES: [&str; 5] = ["setup", "pull", "transition", "receive", "recovery"];

    #[test]
    fn default_phases_get_fraction_table_windows() {
        let d = 2000.0;
        let resp = generate(&names(&DEFAULT_PHASES), None, d);
        assert_eq!(resp.phases.len(), 5);

        let boundaries = [
            ("setup", 0.0, 0.15),
            ("pull", 0.15, 0.45),
            ("transition", 0.45, 0.6),
            ("receive", 0.6, 0.85),
            ("recovery", 0.85, 1.0),
        ];
        for (name, start, end) in boundaries {
            let timing = resp.phases[name].timing;
            assert_eq!(timing.start_ms, d * start, "start of {name}");
            assert_eq!(timing.end_ms, d * end, "end of {name}");
        }
    }

    #[test]
    fn windows_are_contiguous_in_movement_order() {
        let resp = generate(&names(&DEFAULT_PHASES), None, 3600.0);
        for pair in DEFAULT_PHASES.windows(2) {
            assert_eq!(
                resp.phases[pair[0]].timing.end_ms,
                resp.phases[pair[1]].timing.start_ms
            );
        }
    }

    #[test]
    fn unknown_phase_names_are_silently_skipped() {
        let resp = generate(&names(&["setup", "warmup", "cooldown"]), None, 1000.0);
        assert_eq!(resp.phases.len(), 1);
        assert!(resp.phases.contains_key("setup"));
        assert!(!resp.phases.contains_key("warmup"));
    }

    #[test]
    fn bar_path_focus_prepends_priority_recommendation() {
        let focus = names(&["bar path"]);
        let resp = generate(&names(&DEFAULT_PHASES), Some(&focus), 1000.0);
        assert_eq!(resp.recommendations.len(), 5);
        assert!(resp.recommendations[0].starts_with("Priority:"));
    }

    #[test]
    fn no_focus_yields_four_recommendations() {
        let resp = generate(&names(&DEFAULT_PHASES), None, 1000.0);
        assert_eq!(resp.recommendations.len(), 4);
        assert!(!resp.recommendations[0].starts_with("Priority:"));
    }

    #[test]
    fn debug_echoes_focus_areas_or_empty() {
        let focus = names(&["bar path", "receive", "footwork"]);
        let resp = generate(&names(&DEFAULT_PHASES), Some(&focus), 500.0);
        assert_eq!(resp.debug.focus_areas, focus);
        assert_eq!(resp.debug.model, "mock_analysis");

        let resp = generate(&names(&DEFAULT_PHASES), None, 500.0);
        assert!(resp.debug.focus_areas.is_empty());
    }

    #[test]
    fn insights_are_not_part_of_the_response() {
        let focus = names(&["bar path"]);
        let resp = generate(&names(&DEFAULT_PHASES), Some(&focus), 500.0);
        let v = serde_json::to_value(&resp).unwrap();
        assert!(v.get("focus_insights").is_none());
        assert!(v.get("insights").is_none());
    }

    #[test]
    fn focus_insight_selection_ignores_unknown_areas() {
        let focus = names(&["bar path", "grip", "receive"]);
        let insights = focus_insights(Some(&focus));
        assert_eq!(insights.len(), 2);
        assert!(insights[0].contains("Bar drifts"));
    }

    #[test]
    fn zero_duration_yields_degenerate_but_valid_windows() {
        let resp = generate(&names(&DEFAULT_PHASES), None, 0.0);
        for report in resp.phases.values() {
            assert_eq!(report.timing.start_ms, 0.0);
            assert_eq!(report.timing.end_ms, 0.0);
        }
        assert_eq!(resp.debug.duration_ms, 0.0);
    }

    #[test]
    fn overview_is_fixed_regardless_of_inputs() {
        let a = generate(&names(&["pull"]), None, 100.0);
        let b = generate(&names(&DEFAULT_PHASES), Some(&names(&["receive"])), 9999.0);
        assert_eq!(a.overview, b.overview);
    }
}
