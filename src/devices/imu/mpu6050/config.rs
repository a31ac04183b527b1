//! MPU-6050 configuration

use rocket_avionics_core::sensors::mpu6050::{AccelRange, GyroRange};

use super::registers;
use crate::devices::{validate_address, Result};

/// Digital low-pass filter bandwidth (accelerometer figures)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DlpfBandwidth {
    Hz260 = 0,
    Hz184 = 1,
    Hz94 = 2,
    Hz44 = 3,
    #[default]
    Hz21 = 4,
    Hz10 = 5,
    Hz5 = 6,
}

impl DlpfBandwidth {
    /// DLPF_CFG field of the CONFIG register
    pub fn register_value(self) -> u8 {
        self as u8
    }
}

/// MPU-6050 driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mpu6050Config {
    /// 7-bit I2C address (0x68 or 0x69)
    pub address: u8,
    pub accel_range: AccelRange,
    pub gyro_range: GyroRange,
    pub bandwidth: DlpfBandwidth,
}

impl Default for Mpu6050Config {
    fn default() -> Self {
        Self {
            address: registers::ADDR,
            accel_range: AccelRange::G2,
            gyro_range: GyroRange::Dps250,
            bandwidth: DlpfBandwidth::Hz21,
        }
    }
}

impl Mpu6050Config {
    pub fn validate(&self) -> Result<()> {
        validate_address(self.address)
    }
}
