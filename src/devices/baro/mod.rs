//! Barometer drivers

pub mod bmp280;

pub use bmp280::{Bmp280, Bmp280Config};
