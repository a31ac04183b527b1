//! Sensor driver errors

use core::fmt;

use crate::platform::PlatformError;

/// Result type for driver operations
pub type Result<T> = core::result::Result<T, SensorError>;

/// Errors returned by the sensor drivers
///
/// Drivers never retry internally; the caller decides whether to try again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Malformed configuration (names the offending field)
    InvalidArgument(&'static str),
    /// Bus or pin transaction failed, including bus timeouts
    Io(PlatformError),
    /// Protocol wait exceeded its bound (names the stage)
    Timeout(&'static str),
    /// Single-wire frame failed its integrity check
    Checksum {
        /// Sum over the first four bytes
        expected: u8,
        /// Checksum byte received
        actual: u8,
    },
    /// Compensation produced the designated invalid value
    SentinelReading,
}

impl From<PlatformError> for SensorError {
    fn from(e: PlatformError) -> Self {
        SensorError::Io(e)
    }
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorError::InvalidArgument(what) => write!(f, "Invalid argument: {}", what),
            SensorError::Io(e) => write!(f, "I/O failure: {}", e),
            SensorError::Timeout(stage) => write!(f, "Timed out waiting for {}", stage),
            SensorError::Checksum { expected, actual } => write!(
                f,
                "Checksum mismatch: expected {:#04x}, got {:#04x}",
                expected, actual
            ),
            SensorError::SentinelReading => write!(f, "Sensor returned its invalid-reading sentinel"),
        }
    }
}
