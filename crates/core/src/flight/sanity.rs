//! Pre-launch sensor sanity ranges
//!
//! Results are advisory. A failed check is reported and logged by the caller
//! but never holds back phase progression.

/// Result of one sanity check
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CheckOutcome {
    /// Sensor not fitted or read failed; nothing to judge
    #[default]
    Skipped,
    Passed,
    Failed,
}

impl CheckOutcome {
    pub const fn from_bool(ok: bool) -> Self {
        if ok {
            CheckOutcome::Passed
        } else {
            CheckOutcome::Failed
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            CheckOutcome::Skipped => "SKIPPED",
            CheckOutcome::Passed => "PASSED",
            CheckOutcome::Failed => "FAILED",
        }
    }
}

/// Plausible ranges per sensor, all bounds inclusive
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SanityLimits {
    pub baro_temperature_c: (f32, f32),
    pub baro_pressure_hpa: (f32, f32),
    pub hygro_temperature_c: (f32, f32),
    pub hygro_humidity_pct: (f32, f32),
    pub accel_magnitude_g: (f32, f32),
    pub heading_deg: (f32, f32),
}

impl Default for SanityLimits {
    fn default() -> Self {
        Self {
            baro_temperature_c: (-40.0, 85.0),
            baro_pressure_hpa: (300.0, 1100.0),
            hygro_temperature_c: (0.0, 50.0),
            hygro_humidity_pct: (20.0, 90.0),
            accel_magnitude_g: (0.0, 16.0),
            heading_deg: (0.0, 360.0),
        }
    }
}

fn within(value: f32, (lo, hi): (f32, f32)) -> bool {
    // NaN fails both comparisons
    value >= lo && value <= hi
}

impl SanityLimits {
    pub fn check_baro_temperature(&self, celsius: f32) -> CheckOutcome {
        CheckOutcome::from_bool(within(celsius, self.baro_temperature_c))
    }

    pub fn check_baro_pressure(&self, hpa: f32) -> CheckOutcome {
        CheckOutcome::from_bool(within(hpa, self.baro_pressure_hpa))
    }

    pub fn check_hygro_temperature(&self, celsius: f32) -> CheckOutcome {
        CheckOutcome::from_bool(within(celsius, self.hygro_temperature_c))
    }

    pub fn check_hygro_humidity(&self, percent: f32) -> CheckOutcome {
        CheckOutcome::from_bool(within(percent, self.hygro_humidity_pct))
    }

    pub fn check_accel_magnitude(&self, g: f32) -> CheckOutcome {
        CheckOutcome::from_bool(within(g, self.accel_magnitude_g))
    }

    pub fn check_heading(&self, degrees: f32) -> CheckOutcome {
        CheckOutcome::from_bool(within(degrees, self.heading_deg))
    }
}

/// Outcome of the one-time pre-launch sanity pass
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct SanityReport {
    pub baro_temperature: CheckOutcome,
    pub baro_pressure: CheckOutcome,
    pub hygro_temperature: CheckOutcome,
    pub hygro_humidity: CheckOutcome,
    pub accel_magnitude: CheckOutcome,
    pub heading: CheckOutcome,
    pub gps_fix: CheckOutcome,
}

impl SanityReport {
    /// Named outcomes in reporting order
    pub fn entries(&self) -> [(&'static str, CheckOutcome); 7] {
        [
            ("BMP280 temperature", self.baro_temperature),
            ("BMP280 pressure", self.baro_pressure),
            ("DHT11 temperature", self.hygro_temperature),
            ("DHT11 humidity", self.hygro_humidity),
            ("MPU6050 acceleration", self.accel_magnitude),
            ("Compass heading", self.heading),
            ("GPS fix", self.gps_fix),
        ]
    }

    /// No check failed (skipped checks do not count against the pass)
    pub fn all_passed(&self) -> bool {
        self.entries()
            .iter()
            .all(|(_, outcome)| *outcome != CheckOutcome::Failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_inclusive() {
        let limits = SanityLimits::default();
        assert_eq!(limits.check_baro_temperature(-40.0), CheckOutcome::Passed);
        assert_eq!(limits.check_baro_temperature(85.0), CheckOutcome::Passed);
        assert_eq!(limits.check_baro_temperature(85.1), CheckOutcome::Failed);
        assert_eq!(limits.check_heading(360.0), CheckOutcome::Passed);
        assert_eq!(limits.check_accel_magnitude(16.0), CheckOutcome::Passed);
    }

    #[test]
    fn test_out_of_range_fails() {
        let limits = SanityLimits::default();
        assert_eq!(limits.check_baro_pressure(250.0), CheckOutcome::Failed);
        assert_eq!(limits.check_hygro_temperature(-1.0), CheckOutcome::Failed);
        assert_eq!(limits.check_hygro_humidity(95.0), CheckOutcome::Failed);
        assert_eq!(limits.check_accel_magnitude(16.5), CheckOutcome::Failed);
        assert_eq!(limits.check_heading(-0.1), CheckOutcome::Failed);
    }

    #[test]
    fn test_nan_fails() {
        let limits = SanityLimits::default();
        assert_eq!(limits.check_baro_temperature(f32::NAN), CheckOutcome::Failed);
    }

    #[test]
    fn test_report_ignores_skipped() {
        let mut report = SanityReport::default();
        assert!(report.all_passed());

        report.baro_temperature = CheckOutcome::Passed;
        assert!(report.all_passed());

        report.gps_fix = CheckOutcome::Failed;
        assert!(!report.all_passed());
    }
}
