//! DHT11 timing configuration

use crate::devices::{Result, SensorError};

/// Host-side protocol timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dht11Config {
    /// Start pulse: how long the host holds the line low (ms, at least 18)
    pub start_low_ms: u32,
    /// How long the host drives high after the start pulse (µs, 20..=40)
    pub release_us: u32,
    /// Bound for every single wait on a line level (µs)
    pub wait_timeout_us: u32,
    /// Offset into a bit's high pulse at which it is sampled (µs)
    pub sample_delay_us: u32,
}

impl Default for Dht11Config {
    fn default() -> Self {
        Self {
            start_low_ms: 20,
            release_us: 30,
            wait_timeout_us: 100,
            sample_delay_us: 40,
        }
    }
}

impl Dht11Config {
    pub fn validate(&self) -> Result<()> {
        if self.start_low_ms < 18 {
            return Err(SensorError::InvalidArgument("start_low_ms"));
        }
        if !(20..=40).contains(&self.release_us) {
            return Err(SensorError::InvalidArgument("release_us"));
        }
        if self.wait_timeout_us == 0 {
            return Err(SensorError::InvalidArgument("wait_timeout_us"));
        }
        if self.sample_delay_us == 0 || self.sample_delay_us >= self.wait_timeout_us {
            return Err(SensorError::InvalidArgument("sample_delay_us"));
        }
        Ok(())
    }
}
