//! Mock PWM implementation for testing

use std::vec::Vec;

use crate::platform::{
    error::{PlatformError, PwmError},
    traits::{PwmConfig, PwmInterface},
    Result,
};

/// Mock PWM output
///
/// Every off-to-on switch is logged with the frequency in effect, so a test
/// can tell how often a tone was started and at what pitch.
#[derive(Debug)]
pub struct MockPwm {
    duty_cycle: f32,
    frequency: u32,
    enabled: bool,
    tones: Vec<u32>,
}

impl MockPwm {
    pub fn new(config: PwmConfig) -> Self {
        Self {
            duty_cycle: config.duty_cycle,
            frequency: config.frequency,
            enabled: false,
            tones: Vec::new(),
        }
    }

    /// Frequencies at each off-to-on switch, oldest first
    pub fn tones(&self) -> &[u32] {
        &self.tones
    }
}

impl Default for MockPwm {
    fn default() -> Self {
        Self::new(PwmConfig::default())
    }
}

impl PwmInterface for MockPwm {
    fn set_duty_cycle(&mut self, duty_cycle: f32) -> Result<()> {
        if !(0.0..=1.0).contains(&duty_cycle) {
            return Err(PlatformError::Pwm(PwmError::InvalidDutyCycle));
        }
        self.duty_cycle = duty_cycle;
        Ok(())
    }

    fn duty_cycle(&self) -> f32 {
        self.duty_cycle
    }

    fn set_frequency(&mut self, frequency: u32) -> Result<()> {
        if frequency == 0 {
            return Err(PlatformError::Pwm(PwmError::InvalidFrequency));
        }
        self.frequency = frequency;
        Ok(())
    }

    fn frequency(&self) -> u32 {
        self.frequency
    }

    fn enable(&mut self) {
        if !self.enabled {
            self.tones.push(self.frequency);
        }
        self.enabled = true;
    }

    fn disable(&mut self) {
        self.enabled = false;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duty_cycle_bounds() {
        let mut pwm = MockPwm::default();
        assert_eq!(pwm.duty_cycle(), 0.0);

        pwm.set_duty_cycle(0.5).unwrap();
        assert_eq!(pwm.duty_cycle(), 0.5);
        assert_eq!(
            pwm.set_duty_cycle(1.1),
            Err(PlatformError::Pwm(PwmError::InvalidDutyCycle))
        );
        assert_eq!(pwm.duty_cycle(), 0.5);
    }

    #[test]
    fn test_zero_frequency_rejected() {
        let mut pwm = MockPwm::default();
        assert_eq!(pwm.frequency(), 2000);
        assert_eq!(
            pwm.set_frequency(0),
            Err(PlatformError::Pwm(PwmError::InvalidFrequency))
        );
        assert_eq!(pwm.frequency(), 2000);
    }

    #[test]
    fn test_tones_logged_on_switch_on() {
        let mut pwm = MockPwm::default();
        pwm.enable();
        pwm.enable();
        pwm.disable();
        pwm.set_frequency(3100).unwrap();
        pwm.enable();
        assert!(pwm.is_enabled());
        assert_eq!(pwm.tones(), &[2000, 3100]);
    }
}
