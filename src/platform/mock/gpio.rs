//! Mock GPIO implementation for testing

use std::vec::Vec;

use rocket_avionics_core::sensors::dht11::{frame_bit, FRAME_BITS, FRAME_LEN};

use super::timer::MockClock;
use crate::platform::{
    error::{GpioError, PlatformError},
    traits::{GpioInterface, GpioMode},
    Result,
};

/// Recorded pin activity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinEvent {
    Mode { at_us: u64, mode: GpioMode },
    Level { at_us: u64, high: bool },
}

/// Input waveform as consecutive (duration, level) segments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Waveform {
    segments: Vec<(u64, bool)>,
}

impl Waveform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn low(mut self, us: u64) -> Self {
        self.segments.push((us, false));
        self
    }

    pub fn high(mut self, us: u64) -> Self {
        self.segments.push((us, true));
        self
    }

    /// A DHT11 answering with `frame`, timed from the moment the host releases
    /// the line.
    pub fn dht11(frame: &[u8; FRAME_LEN]) -> Self {
        Self::dht11_bits(frame, FRAME_BITS).low(50)
    }

    /// Response preamble followed by only the first `bits` data bits, after
    /// which the sensor goes silent.
    pub fn dht11_bits(frame: &[u8; FRAME_LEN], bits: usize) -> Self {
        let mut wave = Self::new().high(20).low(80).high(80);
        for i in 0..bits.min(FRAME_BITS) {
            let high_us = if frame_bit(frame, i) { 70 } else { 26 };
            wave = wave.low(50).high(high_us);
        }
        wave
    }

    /// Level `elapsed_us` after the start, `None` past the end
    fn level_at(&self, elapsed_us: u64) -> Option<bool> {
        let mut t = 0;
        for (duration, level) in &self.segments {
            t += duration;
            if elapsed_us < t {
                return Some(*level);
            }
        }
        None
    }
}

/// Mock GPIO implementation
///
/// Output writes are recorded with their timestamp. In an input mode the pin
/// reports its idle level, or, once a [`Waveform`] is scripted, plays it back
/// starting when the pin last switched from output to input.
#[derive(Debug)]
pub struct MockGpio {
    clock: MockClock,
    mode: GpioMode,
    driven: bool,
    idle_level: bool,
    script: Option<Waveform>,
    script_start_us: Option<u64>,
    history: Vec<PinEvent>,
}

impl MockGpio {
    /// Create a new mock GPIO in output mode
    pub fn new_output() -> Self {
        Self::with_clock(MockClock::new(), GpioMode::OutputPushPull)
    }

    /// Create a new mock GPIO in input mode
    pub fn new_input() -> Self {
        Self::with_clock(MockClock::new(), GpioMode::Input)
    }

    /// Create a pin on a shared clock
    pub fn with_clock(clock: MockClock, mode: GpioMode) -> Self {
        Self {
            clock,
            mode,
            driven: false,
            idle_level: false,
            script: None,
            script_start_us: None,
            history: Vec::new(),
        }
    }

    /// Set the input state (for simulating input pin reads)
    pub fn set_input_state(&mut self, high: bool) {
        self.idle_level = high;
    }

    /// Play `waveform` after the next output-to-input switch
    pub fn script_input(&mut self, waveform: Waveform) {
        self.script = Some(waveform);
        self.script_start_us = None;
    }

    pub fn history(&self) -> &[PinEvent] {
        &self.history
    }

    /// Driven level changes as (timestamp, high)
    pub fn level_changes(&self) -> Vec<(u64, bool)> {
        self.history
            .iter()
            .filter_map(|e| match e {
                PinEvent::Level { at_us, high } => Some((*at_us, *high)),
                PinEvent::Mode { .. } => None,
            })
            .collect()
    }

    fn drive(&mut self, high: bool) -> Result<()> {
        if !self.mode.is_output() {
            return Err(PlatformError::Gpio(GpioError::InvalidMode));
        }
        self.driven = high;
        self.history.push(PinEvent::Level {
            at_us: self.clock.now_us(),
            high,
        });
        Ok(())
    }
}

impl GpioInterface for MockGpio {
    fn set_high(&mut self) -> Result<()> {
        self.drive(true)
    }

    fn set_low(&mut self) -> Result<()> {
        self.drive(false)
    }

    fn read(&self) -> bool {
        if self.mode.is_output() {
            return self.driven;
        }
        match (&self.script, self.script_start_us) {
            (Some(wave), Some(start)) => wave
                .level_at(self.clock.now_us().saturating_sub(start))
                .unwrap_or(self.idle_level),
            _ => self.idle_level,
        }
    }

    fn set_mode(&mut self, mode: GpioMode) -> Result<()> {
        let now = self.clock.now_us();
        if self.mode.is_output() && !mode.is_output() && self.script.is_some() {
            self.script_start_us = Some(now);
        }
        self.mode = mode;
        self.history.push(PinEvent::Mode { at_us: now, mode });
        Ok(())
    }

    fn mode(&self) -> GpioMode {
        self.mode
    }
}
