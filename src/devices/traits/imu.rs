//! Inertial sensor trait

use nalgebra::Vector3;

use crate::devices::Result;

/// One accelerometer/gyroscope sample in body frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImuSample {
    /// Acceleration in g (includes gravity)
    pub accel_g: Vector3<f32>,
    /// Angular rate in degrees/second
    pub gyro_dps: Vector3<f32>,
}

impl ImuSample {
    /// Length of the acceleration vector (1.0 at rest)
    pub fn accel_magnitude_g(&self) -> f32 {
        self.accel_g.norm()
    }
}

impl Default for ImuSample {
    fn default() -> Self {
        Self {
            accel_g: Vector3::new(0.0, 0.0, 1.0),
            gyro_dps: Vector3::zeros(),
        }
    }
}

/// 6-axis accelerometer/gyroscope
pub trait InertialSensor {
    fn read(&mut self) -> Result<ImuSample>;

    /// Put the sensor to sleep. Idempotent.
    fn power_down(&mut self) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude_at_rest() {
        assert!((ImuSample::default().accel_magnitude_g() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_magnitude_combines_axes() {
        let sample = ImuSample {
            accel_g: Vector3::new(3.0, 0.0, 4.0),
            gyro_dps: Vector3::zeros(),
        };
        assert!((sample.accel_magnitude_g() - 5.0).abs() < 1e-6);
    }
}
