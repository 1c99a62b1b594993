use biomech_core::TimingWindow;

/// The five recognized lift phases, in movement order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Setup,
    Pull,
    Transition,
    Receive,
    Recovery,
}

/// Fraction of total duration where each phase starts/ends. The windows
/// partition `[0, duration]` contiguously.
const FRACTIONS: [(f64, f64); 5] = [
    (0.0, 0.15),  // setup
    (0.15, 0.45), // pull
    (0.45, 0.6),  // transition
    (0.6, 0.85),  // receive
    (0.85, 1.0),  // recovery
];

impl Phase {
    pub const ALL: [Phase; 5] = [
        Phase::Setup,
        Phase::Pull,
        Phase::Transition,
        Phase::Receive,
        Phase::Recovery,
    ];

    /// Map a requested phase name onto a known phase. Unknown names yield
    /// `None` and are skipped by the generator rather than rejected; callers
    /// asking for phases we don't model simply get no entry back.
    pub fn parse(name: &str) -> Option<Phase> {
        match name {
            "setup" => Some(Phase::Setup),
            "pull" => Some(Phase::Pull),
            "transition" => Some(Phase::Transition),
            "receive" => Some(Phase::Receive),
            "recovery" => Some(Phase::Recovery),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Phase::Setup => "setup",
            Phase::Pull => "pull",
            Phase::Transition => "transition",
            Phase::Receive => "receive",
            Phase::Recovery => "recovery",
        }
    }

    /// Timing window for this phase within a video of the given duration.
    pub fn window(&self, duration_ms: f64) -> TimingWindow {
        let (start, end) = FRACTIONS[*self as usize];
        TimingWindow {
            start_ms: duration_ms * start,
            end_ms: duration_ms * end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_names() {
        for phase in Phase::ALL {
            assert_eq!(Phase::parse(phase.name()), Some(phase));
        }
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!(Phase::parse("warmup"), None);
        assert_eq!(Phase::parse("Setup"), None);
        assert_eq!(Phase::parse(""), None);
    }

    #[test]
    fn windows_partition_the_full_duration() {
        let d = 4000.0;
        let windows: Vec<_> = Phase::ALL.iter().map(|p| p.window(d)).collect();
        assert_eq!(windows[0].start_ms, 0.0);
        assert_eq!(windows[4].end_ms, d);
        for pair in windows.windows(2) {
            assert_eq!(pair[0].end_ms, pair[1].start_ms);
        }
    }

    #[test]
    fn window_boundaries_follow_fixed_fractions() {
        let d = 10_000.0;
        assert_eq!(Phase::Setup.window(d).end_ms, 1500.0);
        assert_eq!(Phase::Pull.window(d).end_ms, 4500.0);
        assert_eq!(Phase::Transition.window(d).end_ms, 6000.0);
        assert_eq!(Phase::Receive.window(d).end_ms, 8500.0);
        assert_eq!(Phase::Recovery.window(d).start_ms, 8500.0);
    }
}
