//! IMU Drivers
//!
//! ## Available Drivers
//!
//! - `mpu6050`: MPU-6050 6-axis accelerometer/gyroscope over I2C

pub mod mpu6050;

pub use mpu6050::{Mpu6050, Mpu6050Config};
