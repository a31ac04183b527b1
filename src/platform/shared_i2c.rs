//! Shared I2C bus
//!
//! The pressure, inertial and compass sensors sit on one bus. Each driver gets
//! a [`SharedI2c`] handle; a handle borrows the bus for exactly one
//! transaction, so start/stop sequences from different drivers can never
//! interleave. An access while the bus is already borrowed (re-entry from a
//! callback or interrupt-adjacent context) fails instead of corrupting the
//! ongoing transfer.

use core::cell::RefCell;

use crate::platform::{I2cInterface, PlatformError, Result};

/// Per-driver handle onto a bus owned by a `RefCell`
pub struct SharedI2c<'a, I> {
    bus: &'a RefCell<I>,
}

impl<I> Clone for SharedI2c<'_, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I> Copy for SharedI2c<'_, I> {}

impl<'a, I: I2cInterface> SharedI2c<'a, I> {
    pub fn new(bus: &'a RefCell<I>) -> Self {
        Self { bus }
    }

    fn with_bus<R>(&self, f: impl FnOnce(&mut I) -> Result<R>) -> Result<R> {
        let mut bus = self.bus.try_borrow_mut().map_err(|_| {
            crate::log_warn!("I2C bus busy, transaction rejected");
            PlatformError::ResourceUnavailable
        })?;
        f(&mut bus)
    }
}

impl<I: I2cInterface> I2cInterface for SharedI2c<'_, I> {
    fn write(&mut self, addr: u8, data: &[u8]) -> Result<()> {
        self.with_bus(|bus| bus.write(addr, data))
    }

    fn read(&mut self, addr: u8, buffer: &mut [u8]) -> Result<()> {
        self.with_bus(|bus| bus.read(addr, buffer))
    }

    fn write_read(&mut self, addr: u8, write_data: &[u8], read_buffer: &mut [u8]) -> Result<()> {
        self.with_bus(|bus| bus.write_read(addr, write_data, read_buffer))
    }

    fn set_frequency(&mut self, frequency: u32) -> Result<()> {
        self.with_bus(|bus| bus.set_frequency(frequency))
    }
}
