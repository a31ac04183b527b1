//! Mock platform implementation for testing
//!
//! Host-side stand-ins for the platform traits, used by the driver and
//! flight-computer tests.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled
//!
//! # Example
//!
//! ```
//! use rocket_avionics::platform::mock::MockI2c;
//! use rocket_avionics::platform::I2cInterface;
//!
//! let mut i2c = MockI2c::default();
//! i2c.set_registers(0x76, 0xD0, &[0x58]);
//! assert_eq!(i2c.read_register(0x76, 0xD0).unwrap(), 0x58);
//! ```

#![cfg(any(test, feature = "mock"))]

mod gpio;
mod i2c;
mod pwm;
mod timer;

pub use gpio::{MockGpio, PinEvent, Waveform};
pub use i2c::{I2cTransaction, MockI2c};
pub use pwm::MockPwm;
pub use timer::{MockClock, MockTimer};
