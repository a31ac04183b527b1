//! Piezo buzzer driven by PWM
//!
//! Used as the audible recovery beacon after landing.

use crate::devices::traits::Beacon;
use crate::platform::{PwmInterface, Result};

/// Square wave duty cycle for a piezo element
const TONE_DUTY: f32 = 0.5;

/// PWM buzzer
pub struct Buzzer<P> {
    pwm: P,
}

impl<P: PwmInterface> Buzzer<P> {
    pub fn new(mut pwm: P) -> Self {
        pwm.disable();
        Self { pwm }
    }

    pub fn is_sounding(&self) -> bool {
        self.pwm.is_enabled()
    }

    pub fn release(self) -> P {
        self.pwm
    }
}

impl<P: PwmInterface> Beacon for Buzzer<P> {
    fn arm_beacon(&mut self, tone_hz: u32) -> Result<()> {
        self.pwm.set_frequency(tone_hz)?;
        self.pwm.set_duty_cycle(TONE_DUTY)?;
        self.pwm.enable();
        crate::log_info!("Beacon armed at {} Hz", tone_hz);
        Ok(())
    }

    fn silence(&mut self) -> Result<()> {
        self.pwm.disable();
        Ok(())
    }
}
