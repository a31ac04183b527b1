//! embedded-hal 1.0 adapters
//!
//! Wrap any HAL that implements the `embedded-hal` 1.0 blocking traits so the
//! drivers in this crate can run on real hardware.

use core::cell::RefCell;

use embedded_hal_1::delay::DelayNs;
use embedded_hal_1::digital::{InputPin, OutputPin};
use embedded_hal_1::i2c::{ErrorKind, I2c};

use crate::platform::error::{GpioError, I2cError};
use crate::platform::traits::i2c::check_address;
use crate::platform::{
    GpioInterface, GpioMode, I2cConfig, I2cInterface, PlatformError, Result, TimerInterface,
};

fn map_i2c_error<E: embedded_hal_1::i2c::Error>(e: E) -> PlatformError {
    let kind = match e.kind() {
        ErrorKind::NoAcknowledge(_) => I2cError::Nack,
        ErrorKind::ArbitrationLoss => I2cError::ArbitrationLost,
        _ => I2cError::BusError,
    };
    PlatformError::I2c(kind)
}

/// I2C bus backed by an `embedded_hal::i2c::I2c` implementation
///
/// The bus frequency and timeout are fixed when the HAL peripheral is built,
/// so the peripheral must be created with `config.frequency` and must abort a
/// transaction after `config.timeout_us`. `config` records what it was built
/// with; a HAL timeout error maps to `I2cError::BusError`.
pub struct HalI2c<I> {
    i2c: I,
    config: I2cConfig,
}

impl<I: I2c> HalI2c<I> {
    pub fn new(i2c: I, config: I2cConfig) -> Self {
        Self { i2c, config }
    }

    pub fn config(&self) -> I2cConfig {
        self.config
    }

    pub fn release(self) -> I {
        self.i2c
    }
}

impl<I: I2c> I2cInterface for HalI2c<I> {
    fn write(&mut self, addr: u8, data: &[u8]) -> Result<()> {
        check_address(addr)?;
        self.i2c.write(addr, data).map_err(map_i2c_error)
    }

    fn read(&mut self, addr: u8, buffer: &mut [u8]) -> Result<()> {
        check_address(addr)?;
        self.i2c.read(addr, buffer).map_err(map_i2c_error)
    }

    fn write_read(&mut self, addr: u8, write_data: &[u8], read_buffer: &mut [u8]) -> Result<()> {
        check_address(addr)?;
        self.i2c
            .write_read(addr, write_data, read_buffer)
            .map_err(map_i2c_error)
    }

    fn set_frequency(&mut self, frequency: u32) -> Result<()> {
        if frequency != self.config.frequency {
            return Err(PlatformError::InvalidConfig);
        }
        Ok(())
    }
}

/// Bidirectional pin on an open-drain output with pull-up
///
/// Switching to an input mode releases the line (drives it high) so the
/// device can pull it low.
pub struct HalGpio<P> {
    pin: RefCell<P>,
    mode: GpioMode,
}

impl<P: InputPin + OutputPin> HalGpio<P> {
    pub fn new(pin: P) -> Self {
        Self {
            pin: RefCell::new(pin),
            mode: GpioMode::InputPullUp,
        }
    }

    pub fn release(self) -> P {
        self.pin.into_inner()
    }

    fn drive(&mut self, high: bool) -> Result<()> {
        let pin = self.pin.get_mut();
        let res = if high { pin.set_high() } else { pin.set_low() };
        res.map_err(|_| PlatformError::Gpio(GpioError::PinFault))
    }

    fn require_output(&self) -> Result<()> {
        if self.mode.is_output() {
            Ok(())
        } else {
            Err(PlatformError::Gpio(GpioError::InvalidMode))
        }
    }
}

impl<P: InputPin + OutputPin> GpioInterface for HalGpio<P> {
    fn set_high(&mut self) -> Result<()> {
        self.require_output()?;
        self.drive(true)
    }

    fn set_low(&mut self) -> Result<()> {
        self.require_output()?;
        self.drive(false)
    }

    fn read(&self) -> bool {
        self.pin
            .try_borrow_mut()
            .ok()
            .and_then(|mut pin| pin.is_high().ok())
            .unwrap_or(false)
    }

    fn set_mode(&mut self, mode: GpioMode) -> Result<()> {
        if !mode.is_output() {
            self.drive(true)?;
        }
        self.mode = mode;
        Ok(())
    }

    fn mode(&self) -> GpioMode {
        self.mode
    }
}

/// Timer built from a HAL delay and a free-running microsecond counter
pub struct HalTimer<D> {
    delay: D,
    clock_us: fn() -> u64,
}

impl<D: DelayNs> HalTimer<D> {
    pub fn new(delay: D, clock_us: fn() -> u64) -> Self {
        Self { delay, clock_us }
    }
}

impl<D: DelayNs> TimerInterface for HalTimer<D> {
    fn delay_us(&mut self, us: u32) -> Result<()> {
        self.delay.delay_us(us);
        Ok(())
    }

    fn delay_ms(&mut self, ms: u32) -> Result<()> {
        self.delay.delay_ms(ms);
        Ok(())
    }

    fn now_us(&self) -> u64 {
        (self.clock_us)()
    }
}
