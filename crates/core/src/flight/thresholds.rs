//! Phase transition thresholds

/// Trigger thresholds for phase transitions
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Thresholds {
    /// Altitude gain above the initial altitude that signals launch (m)
    pub ascent_altitude_gain_m: f32,
    /// Acceleration magnitude above 1 g that signals launch (g)
    pub ascent_excess_accel_g: f32,
    /// Drop versus the previous sample that signals apogee (m)
    pub descent_drop_m: f32,
    /// Largest sample-to-sample change still counted as stable (m, exclusive)
    pub landing_stable_band_m: f32,
    /// How long altitude must stay stable before landing (ms)
    pub landing_stable_duration_ms: u64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            ascent_altitude_gain_m: 10.0,
            ascent_excess_accel_g: 0.5,
            descent_drop_m: 1.0,
            landing_stable_band_m: 2.0,
            landing_stable_duration_ms: 3000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_default() {
        let t = Thresholds::default();
        assert_eq!(t.ascent_altitude_gain_m, 10.0);
        assert_eq!(t.ascent_excess_accel_g, 0.5);
        assert_eq!(t.descent_drop_m, 1.0);
        assert_eq!(t.landing_stable_band_m, 2.0);
        assert_eq!(t.landing_stable_duration_ms, 3000);
    }
}
