//! Time abstraction for platform-agnostic timing decisions.
//!
//! The landing debounce needs a monotonic millisecond clock that does not wrap
//! within a single flight. `TimeSource` exposes a 64-bit counter so the
//! detector never has to reason about wraparound.

use core::cell::Cell;

/// Platform-agnostic monotonic time source.
///
/// # Example
///
/// ```
/// use rocket_avionics_core::traits::{MockTime, TimeSource};
///
/// let time = MockTime::new();
/// let start = time.now_ms();
/// time.advance_ms(250);
/// assert_eq!(time.elapsed_ms_since(start), 250);
/// ```
pub trait TimeSource {
    /// Returns current time in milliseconds since system start.
    fn now_ms(&self) -> u64;

    /// Returns current time in microseconds since system start.
    fn now_us(&self) -> u64;

    /// Returns elapsed milliseconds since a reference point.
    ///
    /// Uses saturating subtraction so a reference in the future yields 0.
    fn elapsed_ms_since(&self, reference_ms: u64) -> u64 {
        self.now_ms().saturating_sub(reference_ms)
    }
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }

    fn now_us(&self) -> u64 {
        (**self).now_us()
    }
}

// ============================================================================
// Mock Implementation (always available for testing)
// ============================================================================

/// Mock time source with manual time advancement.
///
/// Shared by reference (`&MockTime` is itself a `TimeSource`) so a test can
/// keep advancing time while the code under test holds the clock.
#[derive(Debug, Default)]
pub struct MockTime {
    current_us: Cell<u64>,
}

impl MockTime {
    /// Creates a new `MockTime` starting at time 0.
    pub fn new() -> Self {
        Self {
            current_us: Cell::new(0),
        }
    }

    /// Creates a new `MockTime` starting at the specified time in milliseconds.
    pub fn with_initial_ms(ms: u64) -> Self {
        Self {
            current_us: Cell::new(ms * 1000),
        }
    }

    /// Sets the current time to an absolute value in milliseconds.
    pub fn set_ms(&self, ms: u64) {
        self.current_us.set(ms * 1000);
    }

    /// Advances the current time by the specified number of milliseconds.
    pub fn advance_ms(&self, ms: u64) {
        self.advance_us(ms * 1000);
    }

    /// Advances the current time by the specified number of microseconds.
    pub fn advance_us(&self, us: u64) {
        self.current_us.set(self.current_us.get() + us);
    }
}

impl TimeSource for MockTime {
    fn now_ms(&self) -> u64 {
        self.current_us.get() / 1000
    }

    fn now_us(&self) -> u64 {
        self.current_us.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_time_initial_value() {
        let time = MockTime::new();
        assert_eq!(time.now_us(), 0);
        assert_eq!(time.now_ms(), 0);
    }

    #[test]
    fn mock_time_with_initial() {
        let time = MockTime::with_initial_ms(5000);
        assert_eq!(time.now_us(), 5_000_000);
        assert_eq!(time.now_ms(), 5000);
    }

    #[test]
    fn mock_time_advance() {
        let time = MockTime::new();
        time.advance_ms(500);
        time.advance_us(999);
        assert_eq!(time.now_ms(), 500);
        time.advance_us(1);
        assert_eq!(time.now_ms(), 501);
    }

    #[test]
    fn elapsed_since_saturates() {
        let time = MockTime::new();
        time.set_ms(1_000);
        assert_eq!(time.elapsed_ms_since(400), 600);
        assert_eq!(time.elapsed_ms_since(5_000), 0);
    }

    #[test]
    fn reference_is_a_time_source() {
        fn read<T: TimeSource>(t: T) -> u64 {
            t.now_ms()
        }

        let time = MockTime::with_initial_ms(42);
        assert_eq!(read(&time), 42);
        time.advance_ms(8);
        assert_eq!(read(&time), 50);
    }
}
