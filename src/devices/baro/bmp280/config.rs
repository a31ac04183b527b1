//! BMP280 configuration

use super::registers;
use crate::devices::{validate_address, Result};

/// Oversampling setting for one measurement channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Oversampling {
    /// Channel disabled
    Skipped = 0,
    X1 = 1,
    X2 = 2,
    X4 = 3,
    X8 = 4,
    X16 = 5,
}

/// Power mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Sleep = 0,
    /// One conversion per request
    Forced = 1,
    /// Continuous conversions separated by the standby time
    Normal = 3,
}

/// IIR filter coefficient
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    Off = 0,
    X2 = 1,
    X4 = 2,
    X8 = 3,
    X16 = 4,
}

/// Standby time between conversions in normal mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Standby {
    Ms0_5 = 0,
    Ms62_5 = 1,
    Ms125 = 2,
    Ms250 = 3,
    Ms500 = 4,
    Ms1000 = 5,
    Ms2000 = 6,
    Ms4000 = 7,
}

/// BMP280 driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bmp280Config {
    /// 7-bit I2C address (0x76 or 0x77)
    pub address: u8,
    pub temperature_oversampling: Oversampling,
    pub pressure_oversampling: Oversampling,
    pub mode: Mode,
    pub filter: Filter,
    pub standby: Standby,
}

impl Default for Bmp280Config {
    fn default() -> Self {
        Self {
            address: registers::ADDR_PRIMARY,
            temperature_oversampling: Oversampling::X2,
            pressure_oversampling: Oversampling::X16,
            mode: Mode::Normal,
            filter: Filter::X16,
            standby: Standby::Ms0_5,
        }
    }
}

impl Bmp280Config {
    pub fn validate(&self) -> Result<()> {
        validate_address(self.address)
    }

    /// CTRL_MEAS value for `mode` with the configured oversampling
    pub fn ctrl_meas(&self, mode: Mode) -> u8 {
        ((self.temperature_oversampling as u8) << 5)
            | ((self.pressure_oversampling as u8) << 2)
            | mode as u8
    }

    /// CONFIG register value
    pub fn config_reg(&self) -> u8 {
        ((self.standby as u8) << 5) | ((self.filter as u8) << 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devices::SensorError;

    #[test]
    fn test_default_register_values() {
        let config = Bmp280Config::default();
        assert_eq!(config.ctrl_meas(config.mode), 0x57);
        assert_eq!(config.ctrl_meas(Mode::Sleep), 0x54);
        assert_eq!(config.config_reg(), 0x10);
    }

    #[test]
    fn test_custom_register_values() {
        let config = Bmp280Config {
            temperature_oversampling: Oversampling::X1,
            pressure_oversampling: Oversampling::X4,
            mode: Mode::Forced,
            filter: Filter::Off,
            standby: Standby::Ms1000,
            ..Default::default()
        };
        assert_eq!(config.ctrl_meas(config.mode), 0b001_011_01);
        assert_eq!(config.config_reg(), 0b101_000_00);
    }

    #[test]
    fn test_address_validation() {
        let config = Bmp280Config {
            address: 0x80,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(SensorError::InvalidArgument("i2c address"))
        );
        assert!(Bmp280Config::default().validate().is_ok());
    }
}
