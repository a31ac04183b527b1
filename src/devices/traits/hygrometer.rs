//! Humidity/temperature sensor trait

use crate::devices::Result;

/// Whole-unit humidity reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HumidityReading {
    /// Degrees Celsius
    pub temperature_c: u8,
    /// Relative humidity in percent
    pub humidity_pct: u8,
}

/// Ambient humidity sensor
pub trait Hygrometer {
    /// One complete transfer. No partial readings: any failure aborts.
    fn read(&mut self) -> Result<HumidityReading>;
}
