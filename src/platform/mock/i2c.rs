//! Mock I2C implementation for testing

use std::collections::{BTreeMap, BTreeSet};
use std::vec::Vec;

use crate::platform::{
    error::I2cError,
    traits::{i2c::check_address, I2cConfig, I2cInterface},
    PlatformError, Result,
};

/// I2C transaction type for logging
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum I2cTransaction {
    /// Write transaction
    Write { addr: u8, data: Vec<u8> },
    /// Read transaction
    Read { addr: u8, len: usize },
    /// Write-Read transaction
    WriteRead {
        addr: u8,
        write_data: Vec<u8>,
        read_len: usize,
    },
}

impl I2cTransaction {
    pub fn addr(&self) -> u8 {
        match self {
            I2cTransaction::Write { addr, .. }
            | I2cTransaction::Read { addr, .. }
            | I2cTransaction::WriteRead { addr, .. } => *addr,
        }
    }
}

/// Mock I2C bus
///
/// Every device is a 256-byte register file with auto-incrementing register
/// pointer, which is how the BMP280, MPU6050 and HMC5883L behave. A write of
/// `[reg, data..]` stores `data` from `reg` on; a write of `[reg]` only moves
/// the pointer. Addresses with no device NACK.
///
/// Each transaction takes `latency_us` of simulated bus time; one slower than
/// `I2cConfig::timeout_us` fails with `I2cError::Timeout`.
///
/// Transactions are recorded (including failed ones) for verification.
#[derive(Debug, Default)]
pub struct MockI2c {
    config: I2cConfig,
    devices: BTreeSet<u8>,
    registers: BTreeMap<(u8, u8), u8>,
    pointers: BTreeMap<u8, u8>,
    transactions: Vec<I2cTransaction>,
    fail_next: Option<PlatformError>,
    fail_all: Option<PlatformError>,
    latency_us: u32,
}

impl MockI2c {
    /// Create a new mock I2C
    pub fn new(config: I2cConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Attach a device with an all-zero register file
    pub fn add_device(&mut self, addr: u8) {
        self.devices.insert(addr);
    }

    /// Detach a device; later transactions to it NACK
    pub fn remove_device(&mut self, addr: u8) {
        self.devices.remove(&addr);
    }

    /// Preload consecutive registers (attaches the device if needed)
    pub fn set_registers(&mut self, addr: u8, reg: u8, values: &[u8]) {
        self.devices.insert(addr);
        for (i, value) in values.iter().enumerate() {
            self.registers
                .insert((addr, reg.wrapping_add(i as u8)), *value);
        }
    }

    /// Current register content (0 if never written)
    pub fn register(&self, addr: u8, reg: u8) -> u8 {
        self.registers.get(&(addr, reg)).copied().unwrap_or(0)
    }

    /// Fail only the next transaction
    pub fn fail_next(&mut self, error: PlatformError) {
        self.fail_next = Some(error);
    }

    /// Fail every transaction until cleared with `None`
    pub fn fail_all(&mut self, error: Option<PlatformError>) {
        self.fail_all = error;
    }

    /// Simulated duration of every following transaction
    pub fn set_latency_us(&mut self, us: u32) {
        self.latency_us = us;
    }

    /// Get transaction log (for test verification)
    pub fn transactions(&self) -> Vec<I2cTransaction> {
        self.transactions.clone()
    }

    /// Payloads of every write transaction to `addr`
    pub fn writes_to(&self, addr: u8) -> Vec<Vec<u8>> {
        self.transactions
            .iter()
            .filter_map(|t| match t {
                I2cTransaction::Write { addr: a, data } if *a == addr => Some(data.clone()),
                _ => None,
            })
            .collect()
    }

    /// Clear transaction log
    pub fn clear_transactions(&mut self) {
        self.transactions.clear();
    }

    /// Get current frequency
    pub fn frequency(&self) -> u32 {
        self.config.frequency
    }

    fn check(&mut self, addr: u8) -> Result<()> {
        check_address(addr)?;
        if let Some(error) = self.fail_next.take().or(self.fail_all) {
            return Err(error);
        }
        if !self.devices.contains(&addr) {
            return Err(PlatformError::I2c(I2cError::Nack));
        }
        if self.latency_us > self.config.timeout_us {
            return Err(PlatformError::I2c(I2cError::Timeout));
        }
        Ok(())
    }

    fn store(&mut self, addr: u8, data: &[u8]) {
        let Some((&reg, payload)) = data.split_first() else {
            return;
        };
        self.set_registers(addr, reg, payload);
        self.pointers
            .insert(addr, reg.wrapping_add(payload.len() as u8));
    }

    fn load(&mut self, addr: u8, buffer: &mut [u8]) {
        let start = self.pointers.get(&addr).copied().unwrap_or(0);
        for (i, byte) in buffer.iter_mut().enumerate() {
            *byte = self.register(addr, start.wrapping_add(i as u8));
        }
        self.pointers
            .insert(addr, start.wrapping_add(buffer.len() as u8));
    }
}

impl I2cInterface for MockI2c {
    fn write(&mut self, addr: u8, data: &[u8]) -> Result<()> {
        self.transactions.push(I2cTransaction::Write {
            addr,
            data: data.to_vec(),
        });
        self.check(addr)?;
        self.store(addr, data);
        Ok(())
    }

    fn read(&mut self, addr: u8, buffer: &mut [u8]) -> Result<()> {
        self.transactions.push(I2cTransaction::Read {
            addr,
            len: buffer.len(),
        });
        self.check(addr)?;
        self.load(addr, buffer);
        Ok(())
    }

    fn write_read(&mut self, addr: u8, write_data: &[u8], read_buffer: &mut [u8]) -> Result<()> {
        self.transactions.push(I2cTransaction::WriteRead {
            addr,
            write_data: write_data.to_vec(),
            read_len: read_buffer.len(),
        });
        self.check(addr)?;
        self.store(addr, write_data);
        self.load(addr, read_buffer);
        Ok(())
    }

    fn set_frequency(&mut self, frequency: u32) -> Result<()> {
        self.config.frequency = frequency;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_i2c_write_updates_registers() {
        let mut i2c = MockI2c::new(I2cConfig::default());
        i2c.add_device(0x50);
        i2c.write(0x50, &[0x10, 0xAA, 0xBB]).unwrap();

        assert_eq!(i2c.register(0x50, 0x10), 0xAA);
        assert_eq!(i2c.register(0x50, 0x11), 0xBB);
        assert_eq!(i2c.writes_to(0x50), vec![vec![0x10, 0xAA, 0xBB]]);
    }

    #[test]
    fn test_mock_i2c_burst_read_auto_increments() {
        let mut i2c = MockI2c::default();
        i2c.set_registers(0x68, 0x3B, &[1, 2, 3, 4]);

        let mut buf = [0u8; 4];
        i2c.write_read(0x68, &[0x3B], &mut buf).unwrap();
        assert_eq!(buf, [1, 2, 3, 4]);

        let mut tail = [0u8; 2];
        i2c.write(0x68, &[0x3D]).unwrap();
        i2c.read(0x68, &mut tail).unwrap();
        assert_eq!(tail, [3, 4]);
    }

    #[test]
    fn test_mock_i2c_missing_device_nacks() {
        let mut i2c = MockI2c::default();
        assert_eq!(
            i2c.write(0x76, &[0xF4, 0x00]),
            Err(PlatformError::I2c(I2cError::Nack))
        );
        assert_eq!(i2c.transactions().len(), 1);
    }

    #[test]
    fn test_mock_i2c_failure_injection() {
        let mut i2c = MockI2c::default();
        i2c.add_device(0x76);

        i2c.fail_next(PlatformError::I2c(I2cError::Timeout));
        assert_eq!(
            i2c.read_register(0x76, 0xD0),
            Err(PlatformError::I2c(I2cError::Timeout))
        );
        assert!(i2c.read_register(0x76, 0xD0).is_ok());

        i2c.fail_all(Some(PlatformError::I2c(I2cError::BusError)));
        assert!(i2c.read_register(0x76, 0xD0).is_err());
        assert!(i2c.read_register(0x76, 0xD0).is_err());
        i2c.fail_all(None);
        assert!(i2c.read_register(0x76, 0xD0).is_ok());
    }

    #[test]
    fn test_mock_i2c_slow_transaction_times_out() {
        let mut i2c = MockI2c::default();
        i2c.set_registers(0x76, 0xD0, &[0x58]);

        i2c.set_latency_us(1_000_000);
        assert_eq!(i2c.read_register(0x76, 0xD0), Ok(0x58));

        i2c.set_latency_us(1_000_001);
        assert_eq!(
            i2c.read_register(0x76, 0xD0),
            Err(PlatformError::I2c(I2cError::Timeout))
        );
        assert_eq!(i2c.transactions().len(), 2);

        let mut fast = MockI2c::new(I2cConfig {
            timeout_us: 500,
            ..Default::default()
        });
        fast.add_device(0x76);
        fast.set_latency_us(600);
        assert!(fast.write(0x76, &[0xF4, 0x00]).is_err());
    }

    #[test]
    fn test_mock_i2c_frequency() {
        let mut i2c = MockI2c::new(I2cConfig::default());
        assert_eq!(i2c.frequency(), 100_000);

        i2c.set_frequency(400_000).unwrap();
        assert_eq!(i2c.frequency(), 400_000);
    }
}
