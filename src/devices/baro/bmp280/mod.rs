//! BMP280 pressure/temperature driver
//!
//! Reads the factory calibration block once at start-up and applies the
//! vendor fixed-point compensation from `rocket_avionics_core::sensors::bmp280`.
//!
//! Temperature compensation produces `t_fine`, which pressure compensation
//! needs. The driver keeps the `t_fine` of the last temperature read and hands
//! it to the next pressure read; a pressure read with nothing retained takes
//! its own temperature reading first.

mod config;
mod driver;
pub mod registers;

pub use config::{Bmp280Config, Filter, Mode, Oversampling, Standby};
pub use driver::Bmp280;
