//! MPU-6050 accelerometer/gyroscope driver
//!
//! Configures full-scale ranges at start-up and reads accel and gyro in one
//! 14-byte burst so both come from the same sample.

mod config;
mod driver;
pub mod registers;

pub use config::{DlpfBandwidth, Mpu6050Config};
pub use driver::Mpu6050;
pub use rocket_avionics_core::sensors::mpu6050::{AccelRange, GyroRange};
