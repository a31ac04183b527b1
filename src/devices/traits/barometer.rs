//! Pressure/temperature sensor trait

use crate::devices::Result;

/// Compensated temperature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Temperature {
    /// Hundredths of a degree Celsius (2508 = 25.08 °C)
    pub centi_celsius: i32,
}

impl Temperature {
    pub fn celsius(&self) -> f32 {
        self.centi_celsius as f32 / 100.0
    }
}

/// Compensated pressure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pressure {
    pub pascals: u32,
}

impl Pressure {
    pub fn hpa(&self) -> f32 {
        self.pascals as f32 / 100.0
    }
}

/// Temperature and pressure from one measurement cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BaroReading {
    pub temperature: Temperature,
    pub pressure: Pressure,
}

/// Barometric pressure sensor
pub trait Barometer {
    /// Read and compensate temperature. Also refreshes the state pressure
    /// compensation depends on.
    fn read_temperature(&mut self) -> Result<Temperature>;

    /// Read and compensate pressure
    fn read_pressure(&mut self) -> Result<Pressure>;

    /// Temperature followed by pressure in the same cycle
    fn read(&mut self) -> Result<BaroReading> {
        let temperature = self.read_temperature()?;
        let pressure = self.read_pressure()?;
        Ok(BaroReading {
            temperature,
            pressure,
        })
    }

    /// Stop conversions. Idempotent.
    fn power_down(&mut self) -> Result<()>;
}
