//! Device drivers
//!
//! Register-level drivers written against the platform traits, plus the
//! capability traits the flight computer consumes.
//!
//! ## Modules
//!
//! - `baro`: BMP280 pressure/temperature driver
//! - `humidity`: DHT11 single-wire humidity/temperature driver
//! - `imu`: MPU6050 accelerometer/gyroscope driver
//! - `compass`: HMC5883L magnetometer driver
//! - `buzzer`: PWM piezo buzzer used as recovery beacon
//! - `traits`: capability and collaborator traits

pub mod baro;
pub mod buzzer;
pub mod compass;
pub mod error;
pub mod humidity;
pub mod imu;
pub mod traits;

pub use error::{Result, SensorError};

use crate::platform::traits::i2c::check_address;

/// Validate a configured 7-bit I2C address
pub(crate) fn validate_address(addr: u8) -> Result<()> {
    check_address(addr).map_err(|_| SensorError::InvalidArgument("i2c address"))
}
