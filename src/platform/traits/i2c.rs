//! I2C interface trait
//!
//! Blocking register-level access shared by the pressure, inertial and compass
//! drivers.

use crate::platform::error::I2cError;
use crate::platform::{PlatformError, Result};

/// I2C configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct I2cConfig {
    /// Bus frequency in Hz (typically 100_000 or 400_000)
    pub frequency: u32,
    /// Upper bound for one transaction in microseconds
    pub timeout_us: u32,
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self {
            frequency: 100_000,    // 100 kHz standard mode
            timeout_us: 1_000_000, // 1 second
        }
    }
}

/// Reject addresses outside the 7-bit range.
pub fn check_address(addr: u8) -> Result<()> {
    if addr > 0x7F {
        return Err(PlatformError::I2c(I2cError::InvalidAddress));
    }
    Ok(())
}

/// I2C interface trait
///
/// Each method is one complete bus transaction (START .. STOP). Implementations
/// must give up and return `I2cError::Timeout` once the configured bound
/// expires.
///
/// # Safety Invariants
///
/// - Address must be 7-bit (valid range: 0x00..=0x7F)
/// - No interleaving of transactions; see
///   [`SharedI2c`](crate::platform::SharedI2c) for sharing one bus
pub trait I2cInterface {
    /// START - ADDR(W) - DATA - STOP
    fn write(&mut self, addr: u8, data: &[u8]) -> Result<()>;

    /// START - ADDR(R) - DATA - STOP
    fn read(&mut self, addr: u8, buffer: &mut [u8]) -> Result<()>;

    /// Write then read with a repeated START
    ///
    /// START - ADDR(W) - WRITE_DATA - REPEATED_START - ADDR(R) - READ_DATA - STOP
    fn write_read(&mut self, addr: u8, write_data: &[u8], read_buffer: &mut [u8]) -> Result<()>;

    /// Set I2C bus frequency
    fn set_frequency(&mut self, frequency: u32) -> Result<()>;

    /// Write one byte to a device register
    fn write_register(&mut self, addr: u8, reg: u8, value: u8) -> Result<()> {
        self.write(addr, &[reg, value])
    }

    /// Read one byte from a device register
    fn read_register(&mut self, addr: u8, reg: u8) -> Result<u8> {
        let mut buf = [0u8; 1];
        self.write_read(addr, &[reg], &mut buf)?;
        Ok(buf[0])
    }

    /// Burst read starting at `reg`
    fn read_registers(&mut self, addr: u8, reg: u8, buffer: &mut [u8]) -> Result<()> {
        self.write_read(addr, &[reg], buffer)
    }
}

impl<T: I2cInterface + ?Sized> I2cInterface for &mut T {
    fn write(&mut self, addr: u8, data: &[u8]) -> Result<()> {
        (**self).write(addr, data)
    }

    fn read(&mut self, addr: u8, buffer: &mut [u8]) -> Result<()> {
        (**self).read(addr, buffer)
    }

    fn write_read(&mut self, addr: u8, write_data: &[u8], read_buffer: &mut [u8]) -> Result<()> {
        (**self).write_read(addr, write_data, read_buffer)
    }

    fn set_frequency(&mut self, frequency: u32) -> Result<()> {
        (**self).set_frequency(frequency)
    }
}
