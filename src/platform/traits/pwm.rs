//! PWM interface trait

use crate::platform::Result;

/// PWM configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PwmConfig {
    /// Output frequency in Hz
    pub frequency: u32,
    /// Initial duty cycle (0.0 to 1.0)
    pub duty_cycle: f32,
}

impl Default for PwmConfig {
    fn default() -> Self {
        Self {
            frequency: 2000,
            duty_cycle: 0.0,
        }
    }
}

/// PWM interface trait
///
/// Drives the piezo buzzer; the tone pitch is the PWM frequency.
pub trait PwmInterface {
    /// Set duty cycle (0.0 to 1.0). Fails with `PwmError::InvalidDutyCycle` otherwise.
    fn set_duty_cycle(&mut self, duty_cycle: f32) -> Result<()>;

    fn duty_cycle(&self) -> f32;

    /// Set frequency in Hz. Fails with `PwmError::InvalidFrequency` for 0.
    fn set_frequency(&mut self, frequency: u32) -> Result<()>;

    fn frequency(&self) -> u32;

    fn enable(&mut self);

    fn disable(&mut self);

    fn is_enabled(&self) -> bool;
}
