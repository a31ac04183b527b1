//! BMP280 I2C Driver Implementation

use rocket_avionics_core::sensors::bmp280::{
    adc_from_bytes, compensate_pressure, compensate_temperature, CalibrationBlock,
    CompensatedTemperature, CALIBRATION_LEN, PRESSURE_SENTINEL,
};

use super::config::{Bmp280Config, Mode};
use super::registers::{self, Status};
use crate::devices::traits::{Barometer, Pressure, Temperature};
use crate::devices::{Result, SensorError};
use crate::platform::I2cInterface;

/// Status polls allowed for one forced-mode conversion
const FORCED_POLL_LIMIT: u32 = 64;

/// BMP280 driver
pub struct Bmp280<I> {
    i2c: I,
    config: Bmp280Config,
    calibration: CalibrationBlock,
    /// `t_fine` of the last temperature read, consumed by the next pressure read
    t_fine: Option<i32>,
}

impl<I: I2cInterface> Bmp280<I> {
    /// Read calibration and configure the sensor
    pub fn new(i2c: I, config: Bmp280Config) -> Result<Self> {
        config.validate()?;

        let mut driver = Self {
            i2c,
            config,
            calibration: CalibrationBlock::default(),
            t_fine: None,
        };

        if let Err(e) = driver.init() {
            crate::log_error!("BMP280 init failed at {:?}: {}", config.address, e);
            return Err(e);
        }
        Ok(driver)
    }

    fn init(&mut self) -> Result<()> {
        let mut raw = [0u8; CALIBRATION_LEN];
        self.i2c
            .read_registers(self.config.address, registers::CALIB_START, &mut raw)?;
        self.calibration = CalibrationBlock::from_bytes(&raw);

        self.i2c.write_register(
            self.config.address,
            registers::CTRL_MEAS,
            self.config.ctrl_meas(self.config.mode),
        )?;
        self.i2c.write_register(
            self.config.address,
            registers::CONFIG,
            self.config.config_reg(),
        )?;

        crate::log_info!(
            "BMP280 initialized (T1={}, P1={})",
            self.calibration.dig_t1,
            self.calibration.dig_p1
        );
        Ok(())
    }

    pub fn calibration(&self) -> &CalibrationBlock {
        &self.calibration
    }

    pub fn config(&self) -> &Bmp280Config {
        &self.config
    }

    /// Chip identification register (0x58 for a genuine BMP280)
    pub fn chip_id(&mut self) -> Result<u8> {
        let id = self
            .i2c
            .read_register(self.config.address, registers::CHIP_ID)?;
        if id != registers::CHIP_ID_VALUE {
            crate::log_warn!("BMP280 unexpected chip id {}", id);
        }
        Ok(id)
    }

    /// Give the bus back
    pub fn release(self) -> I {
        self.i2c
    }

    /// In forced mode, start one conversion and wait for it to finish
    fn trigger_conversion(&mut self) -> Result<()> {
        if self.config.mode != Mode::Forced {
            return Ok(());
        }

        let addr = self.config.address;
        self.i2c
            .write_register(addr, registers::CTRL_MEAS, self.config.ctrl_meas(Mode::Forced))?;

        for _ in 0..FORCED_POLL_LIMIT {
            let status = Status::from_bits_truncate(self.i2c.read_register(addr, registers::STATUS)?);
            if !status.contains(Status::MEASURING) {
                return Ok(());
            }
        }
        crate::log_warn!("BMP280 forced conversion did not finish");
        Err(SensorError::Timeout("forced conversion"))
    }

    fn read_adc(&mut self, reg: u8) -> Result<i32> {
        let mut raw = [0u8; 3];
        self.i2c
            .read_registers(self.config.address, reg, &mut raw)?;
        Ok(adc_from_bytes(raw))
    }

    fn sample_temperature(&mut self) -> Result<CompensatedTemperature> {
        self.trigger_conversion()?;
        let adc_t = self.read_adc(registers::TEMP_MSB)?;
        Ok(compensate_temperature(&self.calibration, adc_t))
    }
}

impl<I: I2cInterface> Barometer for Bmp280<I> {
    fn read_temperature(&mut self) -> Result<Temperature> {
        let compensated = self.sample_temperature()?;
        self.t_fine = Some(compensated.t_fine);
        Ok(Temperature {
            centi_celsius: compensated.centi_celsius,
        })
    }

    fn read_pressure(&mut self) -> Result<Pressure> {
        let t_fine = match self.t_fine.take() {
            Some(t_fine) => t_fine,
            None => self.sample_temperature()?.t_fine,
        };

        let adc_p = self.read_adc(registers::PRESS_MSB)?;
        let pascals = compensate_pressure(&self.calibration, t_fine, adc_p);
        if pascals == PRESSURE_SENTINEL {
            crate::log_warn!("BMP280 pressure compensation hit zero divisor");
            return Err(SensorError::SentinelReading);
        }
        Ok(Pressure { pascals })
    }

    fn power_down(&mut self) -> Result<()> {
        self.i2c.write_register(
            self.config.address,
            registers::CTRL_MEAS,
            self.config.ctrl_meas(Mode::Sleep),
        )?;
        self.t_fine = None;
        crate::log_info!("BMP280 powered down");
        Ok(())
    }
}
