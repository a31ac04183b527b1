//! Magnetometer trait

use crate::devices::Result;

/// Magnetic compass
pub trait Compass {
    /// Heading in degrees, `[0, 360)`
    fn read_heading(&mut self) -> Result<f32>;

    /// Stop measurements. Idempotent.
    fn power_down(&mut self) -> Result<()>;
}
