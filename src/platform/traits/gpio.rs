//! GPIO interface trait
//!
//! Used for the single-wire sensor line, which switches between driving the
//! bus and listening to it within one transfer.

use crate::platform::Result;

/// GPIO pin mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GpioMode {
    /// Input mode (high impedance)
    Input,
    /// Input mode with pull-up resistor
    InputPullUp,
    /// Input mode with pull-down resistor
    InputPullDown,
    /// Output mode (push-pull)
    OutputPushPull,
    /// Output mode (open-drain)
    OutputOpenDrain,
}

impl GpioMode {
    pub fn is_output(self) -> bool {
        matches!(self, GpioMode::OutputPushPull | GpioMode::OutputOpenDrain)
    }
}

/// GPIO interface trait
///
/// `read` must be cheap: the single-wire driver polls it in a busy loop.
pub trait GpioInterface {
    /// Drive the pin high. Fails with `GpioError::InvalidMode` on inputs.
    fn set_high(&mut self) -> Result<()>;

    /// Drive the pin low. Fails with `GpioError::InvalidMode` on inputs.
    fn set_low(&mut self) -> Result<()>;

    /// Current line level, `true` when high. Valid in every mode.
    fn read(&self) -> bool;

    /// Set GPIO pin mode
    fn set_mode(&mut self, mode: GpioMode) -> Result<()>;

    /// Get current GPIO pin mode
    fn mode(&self) -> GpioMode;
}

impl<T: GpioInterface + ?Sized> GpioInterface for &mut T {
    fn set_high(&mut self) -> Result<()> {
        (**self).set_high()
    }

    fn set_low(&mut self) -> Result<()> {
        (**self).set_low()
    }

    fn read(&self) -> bool {
        (**self).read()
    }

    fn set_mode(&mut self, mode: GpioMode) -> Result<()> {
        (**self).set_mode(mode)
    }

    fn mode(&self) -> GpioMode {
        (**self).mode()
    }
}
