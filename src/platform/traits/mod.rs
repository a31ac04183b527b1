//! Platform abstraction traits
//!
//! Blocking peripheral interfaces the sensor drivers are written against.

pub mod gpio;
pub mod i2c;
pub mod pwm;
pub mod timer;

pub use gpio::{GpioInterface, GpioMode};
pub use i2c::{I2cConfig, I2cInterface};
pub use pwm::{PwmConfig, PwmInterface};
pub use timer::{TimerInterface, TimerTimeSource};
