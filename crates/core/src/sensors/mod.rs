//! Sensor math shared by the drivers.
//!
//! Everything here operates on already-transferred register bytes, so the
//! exact vendor arithmetic can be exercised on host without a bus.
//!
//! - [`bmp280`]: calibration block parsing and fixed-point compensation
//! - [`dht11`]: 5-byte single-wire frame codec and checksum
//! - [`mpu6050`]: inertial burst decoding and sensitivity scaling
//! - [`hmc5883l`]: magnetometer burst decoding and heading

pub mod bmp280;
pub mod dht11;
pub mod hmc5883l;
pub mod mpu6050;
