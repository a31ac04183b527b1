//! MPU-6050 I2C Driver Implementation

use nalgebra::Vector3;
use rocket_avionics_core::sensors::mpu6050::{accel_to_g, decode_burst, gyro_to_dps, BURST_LEN};

use super::config::Mpu6050Config;
use super::registers::{self, PowerManagement};
use crate::devices::traits::{ImuSample, InertialSensor};
use crate::devices::Result;
use crate::platform::I2cInterface;

/// MPU-6050 driver
pub struct Mpu6050<I> {
    i2c: I,
    config: Mpu6050Config,
}

impl<I: I2cInterface> Mpu6050<I> {
    /// Wake the device and set the full-scale ranges
    pub fn new(i2c: I, config: Mpu6050Config) -> Result<Self> {
        config.validate()?;
        let mut driver = Self { i2c, config };

        if let Err(e) = driver.init() {
            crate::log_error!("MPU6050 init failed: {}", e);
            return Err(e);
        }
        Ok(driver)
    }

    fn init(&mut self) -> Result<()> {
        let addr = self.config.address;
        // clearing PWR_MGMT_1 also clears SLEEP
        self.i2c
            .write_register(addr, registers::PWR_MGMT_1, PowerManagement::empty().bits())?;
        self.i2c.write_register(
            addr,
            registers::ACCEL_CONFIG,
            self.config.accel_range.register_value(),
        )?;
        self.i2c.write_register(
            addr,
            registers::GYRO_CONFIG,
            self.config.gyro_range.register_value(),
        )?;
        self.i2c.write_register(
            addr,
            registers::CONFIG,
            self.config.bandwidth.register_value(),
        )?;
        crate::log_info!("MPU6050 initialized");
        Ok(())
    }

    pub fn config(&self) -> &Mpu6050Config {
        &self.config
    }

    /// WHO_AM_I register (0x68 for a genuine part)
    pub fn who_am_i(&mut self) -> Result<u8> {
        Ok(self
            .i2c
            .read_register(self.config.address, registers::WHO_AM_I)?)
    }

    pub fn release(self) -> I {
        self.i2c
    }
}

impl<I: I2cInterface> InertialSensor for Mpu6050<I> {
    fn read(&mut self) -> Result<ImuSample> {
        let mut buf = [0u8; BURST_LEN];
        self.i2c
            .read_registers(self.config.address, registers::ACCEL_XOUT_H, &mut buf)?;

        let raw = decode_burst(&buf);
        let accel = self.config.accel_range;
        let gyro = self.config.gyro_range;

        Ok(ImuSample {
            accel_g: Vector3::new(
                accel_to_g(raw.accel[0], accel),
                accel_to_g(raw.accel[1], accel),
                accel_to_g(raw.accel[2], accel),
            ),
            gyro_dps: Vector3::new(
                gyro_to_dps(raw.gyro[0], gyro),
                gyro_to_dps(raw.gyro[1], gyro),
                gyro_to_dps(raw.gyro[2], gyro),
            ),
        })
    }

    fn power_down(&mut self) -> Result<()> {
        self.i2c.write_register(
            self.config.address,
            registers::PWR_MGMT_1,
            PowerManagement::SLEEP.bits(),
        )?;
        crate::log_info!("MPU6050 powered down");
        Ok(())
    }
}
