//! Flight phase types

use core::fmt;

/// Flight phase of the vehicle
///
/// Phases only move forward; [`FlightPhase::PostLand`] is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FlightPhase {
    /// On the pad, waiting for launch
    #[default]
    PreLaunch,
    /// Climbing
    Ascent,
    /// Falling after apogee
    Descent,
    /// On the ground after the flight
    PostLand,
}

impl FlightPhase {
    /// Upper-case label used in logs
    pub const fn label(self) -> &'static str {
        match self {
            FlightPhase::PreLaunch => "PRELAUNCH",
            FlightPhase::Ascent => "ASCENT",
            FlightPhase::Descent => "DESCENT",
            FlightPhase::PostLand => "POSTLAND",
        }
    }

    /// Whether no further transition can happen
    pub const fn is_terminal(self) -> bool {
        matches!(self, FlightPhase::PostLand)
    }
}

impl fmt::Display for FlightPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A phase change observed during one update
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhaseTransition {
    pub from: FlightPhase,
    pub to: FlightPhase,
    /// Timestamp of the sample that caused the change
    pub at_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_default() {
        assert_eq!(FlightPhase::default(), FlightPhase::PreLaunch);
    }

    #[test]
    fn test_phase_labels() {
        assert_eq!(FlightPhase::PreLaunch.label(), "PRELAUNCH");
        assert_eq!(FlightPhase::Ascent.label(), "ASCENT");
        assert_eq!(FlightPhase::Descent.label(), "DESCENT");
        assert_eq!(FlightPhase::PostLand.label(), "POSTLAND");
    }

    #[test]
    fn test_only_postland_is_terminal() {
        assert!(!FlightPhase::PreLaunch.is_terminal());
        assert!(!FlightPhase::Ascent.is_terminal());
        assert!(!FlightPhase::Descent.is_terminal());
        assert!(FlightPhase::PostLand.is_terminal());
    }
}
