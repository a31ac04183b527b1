//! HMC5883L I2C Driver Implementation

use rocket_avionics_core::sensors::hmc5883l::{decode_burst, heading_deg, RawMagnetic, BURST_LEN};

use super::registers;
use crate::devices::traits::Compass;
use crate::devices::{validate_address, Result};
use crate::platform::I2cInterface;

/// HMC5883L driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hmc5883lConfig {
    pub address: u8,
}

impl Default for Hmc5883lConfig {
    fn default() -> Self {
        Self {
            address: registers::ADDR,
        }
    }
}

/// HMC5883L driver
pub struct Hmc5883l<I> {
    i2c: I,
    config: Hmc5883lConfig,
}

impl<I: I2cInterface> Hmc5883l<I> {
    /// Configure averaging and gain, start continuous measurement
    pub fn new(i2c: I, config: Hmc5883lConfig) -> Result<Self> {
        validate_address(config.address)?;
        let mut driver = Self { i2c, config };

        let addr = config.address;
        let init = [
            (registers::CONFIG_A, registers::CONFIG_A_DEFAULT),
            (registers::CONFIG_B, registers::CONFIG_B_DEFAULT),
            (registers::MODE, registers::MODE_CONTINUOUS),
        ];
        for (reg, value) in init {
            if let Err(e) = driver.i2c.write_register(addr, reg, value) {
                crate::log_error!("HMC5883L init failed: {}", e);
                return Err(e.into());
            }
        }

        crate::log_info!("HMC5883L initialized");
        Ok(driver)
    }

    pub fn read_raw(&mut self) -> Result<RawMagnetic> {
        let mut buf = [0u8; BURST_LEN];
        self.i2c
            .read_registers(self.config.address, registers::DATA_X_MSB, &mut buf)?;
        Ok(decode_burst(&buf))
    }

    pub fn release(self) -> I {
        self.i2c
    }
}

impl<I: I2cInterface> Compass for Hmc5883l<I> {
    fn read_heading(&mut self) -> Result<f32> {
        Ok(heading_deg(self.read_raw()?))
    }

    fn power_down(&mut self) -> Result<()> {
        self.i2c
            .write_register(self.config.address, registers::MODE, registers::MODE_IDLE)?;
        crate::log_info!("HMC5883L powered down");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::MockI2c;

    const ADDR: u8 = 0x1E;

    #[test]
    fn test_init_sequence() {
        let mut i2c = MockI2c::default();
        i2c.add_device(ADDR);
        Hmc5883l::new(&mut i2c, Hmc5883lConfig::default()).unwrap();
        assert_eq!(
            i2c.writes_to(ADDR),
            vec![vec![0x00, 0x70], vec![0x01, 0x20], vec![0x02, 0x00]]
        );
    }

    #[test]
    fn test_heading_uses_x_and_y() {
        let mut i2c = MockI2c::default();
        // X = 0, Z = 500, Y = 100
        i2c.set_registers(ADDR, 0x03, &[0x00, 0x00, 0x01, 0xF4, 0x00, 0x64]);
        let mut compass = Hmc5883l::new(&mut i2c, Hmc5883lConfig::default()).unwrap();

        let raw = compass.read_raw().unwrap();
        assert_eq!(raw, RawMagnetic { x: 0, y: 100, z: 500 });
        assert!((compass.read_heading().unwrap() - 90.0).abs() < 1e-3);
    }

    #[test]
    fn test_missing_device_fails_init() {
        let mut i2c = MockI2c::default();
        assert!(Hmc5883l::new(&mut i2c, Hmc5883lConfig::default()).is_err());
    }

    #[test]
    fn test_power_down_idles() {
        let mut i2c = MockI2c::default();
        i2c.add_device(ADDR);
        let mut compass = Hmc5883l::new(&mut i2c, Hmc5883lConfig::default()).unwrap();
        compass.power_down().unwrap();
        drop(compass);
        assert_eq!(i2c.register(ADDR, 0x02), 0x03);
    }
}
