//! Flight phase detector
//!
//! Owns the [`DetectionContext`] and advances it by at most one phase per
//! sample. Timing comes from the sample timestamps, which must be monotonic.

use super::phase::{FlightPhase, PhaseTransition};
use super::thresholds::Thresholds;

/// One poll worth of derived measurements
///
/// `None` means no new data this cycle (sensor absent or read failed).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct FlightSample {
    /// Monotonic timestamp (ms)
    pub timestamp_ms: u64,
    /// Barometric altitude (m)
    pub altitude_m: Option<f32>,
    /// Acceleration vector magnitude (g)
    pub accel_magnitude_g: Option<f32>,
}

/// Mutable detection state for a single flight
///
/// Created once at start-up and never reset.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct DetectionContext {
    pub phase: FlightPhase,
    /// Altitude of the first sample that carried one
    pub initial_altitude_m: Option<f32>,
    /// Altitude of the most recent sample that carried one
    pub last_altitude_m: Option<f32>,
    /// Start of the current stable-altitude window
    pub stable_since_ms: Option<u64>,
    pub sanity_check_done: bool,
    pub power_down_fired: bool,
    pub beacon_armed: bool,
}

/// One-shot side effects requested by an update
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct PhaseActions {
    /// Put inertial, compass and pressure sensors to sleep
    pub power_down: bool,
    /// Start the recovery beacon
    pub arm_beacon: bool,
}

impl PhaseActions {
    pub const NONE: Self = Self {
        power_down: false,
        arm_beacon: false,
    };

    pub fn any(&self) -> bool {
        self.power_down || self.arm_beacon
    }
}

/// Result of [`PhaseDetector::update`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhaseUpdate {
    /// Phase after this update
    pub phase: FlightPhase,
    pub transition: Option<PhaseTransition>,
    pub actions: PhaseActions,
}

/// Flight phase state machine
#[derive(Clone, Debug)]
pub struct PhaseDetector {
    thresholds: Thresholds,
    context: DetectionContext,
}

impl Default for PhaseDetector {
    fn default() -> Self {
        Self::new(Thresholds::default())
    }
}

impl PhaseDetector {
    pub fn new(thresholds: Thresholds) -> Self {
        Self {
            thresholds,
            context: DetectionContext::default(),
        }
    }

    pub fn phase(&self) -> FlightPhase {
        self.context.phase
    }

    pub fn context(&self) -> &DetectionContext {
        &self.context
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// The one-time sanity pass is still pending
    pub fn needs_sanity_check(&self) -> bool {
        self.context.phase == FlightPhase::PreLaunch && !self.context.sanity_check_done
    }

    pub fn mark_sanity_check_done(&mut self) {
        self.context.sanity_check_done = true;
    }

    /// Feed one sample and advance the phase
    pub fn update(&mut self, sample: &FlightSample) -> PhaseUpdate {
        let from = self.context.phase;

        let advance = match from {
            FlightPhase::PreLaunch => self.detect_launch(sample),
            FlightPhase::Ascent => self.detect_descent(sample),
            FlightPhase::Descent => self.detect_landing(sample),
            FlightPhase::PostLand => false,
        };

        if let Some(alt) = sample.altitude_m {
            self.context.last_altitude_m = Some(alt);
        }

        if !advance {
            return PhaseUpdate {
                phase: from,
                transition: None,
                actions: PhaseActions::NONE,
            };
        }

        let to = match from {
            FlightPhase::PreLaunch => FlightPhase::Ascent,
            FlightPhase::Ascent => FlightPhase::Descent,
            FlightPhase::Descent | FlightPhase::PostLand => FlightPhase::PostLand,
        };
        self.context.phase = to;

        let actions = if to == FlightPhase::PostLand {
            self.latch_landing_actions()
        } else {
            PhaseActions::NONE
        };

        PhaseUpdate {
            phase: to,
            transition: Some(PhaseTransition {
                from,
                to,
                at_ms: sample.timestamp_ms,
            }),
            actions,
        }
    }

    fn accel_trigger(&self, sample: &FlightSample) -> bool {
        sample
            .accel_magnitude_g
            .is_some_and(|g| g - 1.0 > self.thresholds.ascent_excess_accel_g)
    }

    fn detect_launch(&mut self, sample: &FlightSample) -> bool {
        let Some(initial) = self.context.initial_altitude_m else {
            if let Some(alt) = sample.altitude_m {
                // first altitude only sets the reference
                self.context.initial_altitude_m = Some(alt);
                return false;
            }
            return self.accel_trigger(sample);
        };

        let climbed = sample
            .altitude_m
            .is_some_and(|alt| alt - initial > self.thresholds.ascent_altitude_gain_m);

        climbed || self.accel_trigger(sample)
    }

    fn detect_descent(&self, sample: &FlightSample) -> bool {
        match (sample.altitude_m, self.context.last_altitude_m) {
            (Some(alt), Some(last)) => alt < last - self.thresholds.descent_drop_m,
            _ => false,
        }
    }

    fn detect_landing(&mut self, sample: &FlightSample) -> bool {
        // no reading: the stability window is left as is
        let (Some(alt), Some(last)) = (sample.altitude_m, self.context.last_altitude_m) else {
            return false;
        };

        if libm::fabsf(alt - last) >= self.thresholds.landing_stable_band_m {
            self.context.stable_since_ms = None;
            return false;
        }

        match self.context.stable_since_ms {
            None => {
                self.context.stable_since_ms = Some(sample.timestamp_ms);
                false
            }
            Some(since) => {
                sample.timestamp_ms.saturating_sub(since)
                    >= self.thresholds.landing_stable_duration_ms
            }
        }
    }

    fn latch_landing_actions(&mut self) -> PhaseActions {
        let mut actions = PhaseActions::NONE;
        if !self.context.power_down_fired {
            self.context.power_down_fired = true;
            actions.power_down = true;
        }
        if !self.context.beacon_armed {
            self.context.beacon_armed = true;
            actions.arm_beacon = true;
        }
        actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alt_sample(timestamp_ms: u64, altitude_m: f32) -> FlightSample {
        FlightSample {
            timestamp_ms,
            altitude_m: Some(altitude_m),
            accel_magnitude_g: None,
        }
    }

    /// Drive the detector into DESCENT with the last altitude at `alt`.
    fn descending_at(alt: f32, t_ms: u64) -> PhaseDetector {
        let mut det = PhaseDetector::default();
        det.update(&alt_sample(0, 0.0));
        det.update(&alt_sample(1, alt + 20.0));
        det.update(&alt_sample(t_ms, alt));
        assert_eq!(det.phase(), FlightPhase::Descent);
        det
    }

    #[test]
    fn test_first_sample_only_records_reference() {
        let mut det = PhaseDetector::default();
        let update = det.update(&FlightSample {
            timestamp_ms: 0,
            altitude_m: Some(100.0),
            accel_magnitude_g: Some(3.0),
        });
        assert_eq!(update.phase, FlightPhase::PreLaunch);
        assert!(update.transition.is_none());
        assert_eq!(det.context().initial_altitude_m, Some(100.0));
        assert_eq!(det.context().last_altitude_m, Some(100.0));
    }

    #[test]
    fn test_ascent_on_exact_altitude_sample() {
        let mut det = PhaseDetector::default();
        let altitudes = [100.0, 105.0, 110.0, 109.0, 109.5];
        for (i, alt) in altitudes.iter().enumerate() {
            let update = det.update(&alt_sample(i as u64 * 100, *alt));
            assert_eq!(update.phase, FlightPhase::PreLaunch, "sample {}", i);
        }

        let update = det.update(&alt_sample(500, 110.01));
        assert_eq!(update.phase, FlightPhase::Ascent);
        assert_eq!(
            update.transition,
            Some(PhaseTransition {
                from: FlightPhase::PreLaunch,
                to: FlightPhase::Ascent,
                at_ms: 500,
            })
        );
    }

    #[test]
    fn test_ascent_on_acceleration() {
        let mut det = PhaseDetector::default();
        det.update(&alt_sample(0, 100.0));

        let mut sample = alt_sample(10, 100.0);
        sample.accel_magnitude_g = Some(1.5);
        assert_eq!(det.update(&sample).phase, FlightPhase::PreLaunch);

        sample.timestamp_ms = 20;
        sample.accel_magnitude_g = Some(1.51);
        assert_eq!(det.update(&sample).phase, FlightPhase::Ascent);
    }

    #[test]
    fn test_ascent_on_acceleration_without_barometer() {
        let mut det = PhaseDetector::default();
        let update = det.update(&FlightSample {
            timestamp_ms: 0,
            altitude_m: None,
            accel_magnitude_g: Some(4.0),
        });
        assert_eq!(update.phase, FlightPhase::Ascent);
    }

    #[test]
    fn test_descent_needs_more_than_one_metre_drop() {
        let mut det = PhaseDetector::default();
        det.update(&alt_sample(0, 0.0));
        det.update(&alt_sample(100, 50.0));
        assert_eq!(det.phase(), FlightPhase::Ascent);

        assert_eq!(det.update(&alt_sample(200, 49.0)).phase, FlightPhase::Ascent);
        assert_eq!(det.update(&alt_sample(300, 48.5)).phase, FlightPhase::Ascent);
        assert_eq!(det.update(&alt_sample(400, 47.4)).phase, FlightPhase::Descent);
    }

    #[test]
    fn test_landing_after_exactly_stable_duration() {
        let mut det = descending_at(10.0, 1000);

        // window opens at t=2000
        for t in [2000, 3000, 4000] {
            let update = det.update(&alt_sample(t, 10.5));
            assert_eq!(update.phase, FlightPhase::Descent, "t = {}", t);
        }
        assert_eq!(det.update(&alt_sample(4999, 10.0)).phase, FlightPhase::Descent);

        let update = det.update(&alt_sample(5000, 10.2));
        assert_eq!(update.phase, FlightPhase::PostLand);
        assert_eq!(
            update.actions,
            PhaseActions {
                power_down: true,
                arm_beacon: true,
            }
        );

        for t in [6000, 7000, 100_000] {
            let update = det.update(&alt_sample(t, 10.0));
            assert_eq!(update.phase, FlightPhase::PostLand);
            assert!(update.transition.is_none());
            assert!(!update.actions.any());
        }
        assert!(det.context().power_down_fired);
        assert!(det.context().beacon_armed);
    }

    #[test]
    fn test_spike_resets_landing_window() {
        let mut det = descending_at(10.0, 1000);

        det.update(&alt_sample(2000, 10.0)); // window opens
        det.update(&alt_sample(3000, 10.0));
        det.update(&alt_sample(4000, 10.0));
        assert_eq!(det.context().stable_since_ms, Some(2000));

        // 3 m spike at 2999 ms into the window
        det.update(&alt_sample(4999, 13.0));
        assert_eq!(det.context().stable_since_ms, None);
        assert_eq!(det.update(&alt_sample(5000, 10.0)).phase, FlightPhase::Descent);
        assert_eq!(det.context().stable_since_ms, None);

        det.update(&alt_sample(6000, 10.0)); // window reopens
        assert_eq!(det.update(&alt_sample(8999, 10.0)).phase, FlightPhase::Descent);
        assert_eq!(det.update(&alt_sample(9000, 10.0)).phase, FlightPhase::PostLand);
    }

    #[test]
    fn test_missing_altitude_keeps_landing_window() {
        let mut det = descending_at(10.0, 1000);
        det.update(&alt_sample(2000, 10.0));
        assert_eq!(det.context().stable_since_ms, Some(2000));

        let update = det.update(&FlightSample {
            timestamp_ms: 3000,
            altitude_m: None,
            accel_magnitude_g: Some(1.0),
        });
        assert_eq!(update.phase, FlightPhase::Descent);
        assert_eq!(det.context().stable_since_ms, Some(2000));
        assert_eq!(det.context().last_altitude_m, Some(10.0));

        assert_eq!(det.update(&alt_sample(5000, 10.0)).phase, FlightPhase::PostLand);
    }

    #[test]
    fn test_sanity_check_pending_only_in_prelaunch() {
        let mut det = PhaseDetector::default();
        assert!(det.needs_sanity_check());
        det.mark_sanity_check_done();
        assert!(!det.needs_sanity_check());

        let mut det = PhaseDetector::default();
        det.update(&FlightSample {
            timestamp_ms: 0,
            altitude_m: None,
            accel_magnitude_g: Some(3.0),
        });
        assert!(!det.needs_sanity_check());
    }

    #[test]
    fn test_reference_flight_profile() {
        let altitudes = [
            100.0, 101.0, 112.0, 130.0, 125.0, 90.0, 50.0, 20.0, 11.0, 10.0, 10.0, 10.0, 10.0,
        ];
        let mut det = PhaseDetector::default();
        let mut transitions = [None; 13];
        let mut power_downs = 0;
        let mut beacons = 0;

        for (i, alt) in altitudes.iter().enumerate() {
            let update = det.update(&alt_sample(i as u64 * 1000, *alt));
            transitions[i] = update.transition.map(|t| t.to);
            power_downs += update.actions.power_down as u32;
            beacons += update.actions.arm_beacon as u32;
        }

        assert_eq!(transitions[2], Some(FlightPhase::Ascent));
        assert_eq!(transitions[4], Some(FlightPhase::Descent));
        assert_eq!(transitions[12], Some(FlightPhase::PostLand));
        assert_eq!(transitions.iter().filter(|t| t.is_some()).count(), 3);
        assert_eq!(power_downs, 1);
        assert_eq!(beacons, 1);
        assert_eq!(det.context().initial_altitude_m, Some(100.0));
    }
}
