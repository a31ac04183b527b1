//! Recovery beacon collaborator

use crate::platform::Result;

/// Audible recovery beacon
pub trait Beacon {
    /// Start sounding at `tone_hz`
    fn arm_beacon(&mut self, tone_hz: u32) -> Result<()>;

    fn silence(&mut self) -> Result<()>;
}
