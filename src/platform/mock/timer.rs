//! Mock Timer implementation for testing

use std::cell::Cell;
use std::rc::Rc;

use crate::platform::{traits::TimerInterface, Result};

/// Simulated microsecond clock
///
/// Clones share the same counter, so a [`MockTimer`] and a
/// [`MockGpio`](super::MockGpio) built from one clock agree on "now".
#[derive(Debug, Clone, Default)]
pub struct MockClock {
    now_us: Rc<Cell<u64>>,
}

impl MockClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_us(&self) -> u64 {
        self.now_us.get()
    }

    pub fn set_us(&self, us: u64) {
        self.now_us.set(us);
    }

    pub fn advance_us(&self, us: u64) {
        self.now_us.set(self.now_us.get().saturating_add(us));
    }
}

/// Mock Timer implementation
///
/// Delays advance the clock instantly. With a non-zero `tick_us`, every
/// `now_us()` call also advances the clock, which models the cost of one
/// iteration of a busy-wait loop and guarantees such loops terminate.
#[derive(Debug)]
pub struct MockTimer {
    clock: MockClock,
    tick_us: u64,
}

impl MockTimer {
    /// Create a new mock timer on a private clock
    pub fn new() -> Self {
        Self::with_clock(MockClock::new(), 0)
    }

    /// Create a timer on a shared clock
    pub fn with_clock(clock: MockClock, tick_us: u64) -> Self {
        Self { clock, tick_us }
    }

    pub fn clock(&self) -> &MockClock {
        &self.clock
    }
}

impl Default for MockTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerInterface for MockTimer {
    fn delay_us(&mut self, us: u32) -> Result<()> {
        self.clock.advance_us(us as u64);
        Ok(())
    }

    fn now_us(&self) -> u64 {
        let now = self.clock.now_us();
        self.clock.advance_us(self.tick_us);
        now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_timer_delay_us() {
        let mut timer = MockTimer::new();
        assert_eq!(timer.now_us(), 0);

        timer.delay_us(1000).unwrap();
        assert_eq!(timer.now_us(), 1000);

        timer.delay_us(500).unwrap();
        assert_eq!(timer.now_us(), 1500);
    }

    #[test]
    fn test_mock_timer_delay_ms() {
        let mut timer = MockTimer::new();
        timer.delay_ms(5).unwrap();
        assert_eq!(timer.now_us(), 5000);
        assert_eq!(timer.now_ms(), 5);
    }

    #[test]
    fn test_mock_timer_tick_advances_shared_clock() {
        let clock = MockClock::new();
        let timer = MockTimer::with_clock(clock.clone(), 1);

        assert_eq!(timer.now_us(), 0);
        assert_eq!(timer.now_us(), 1);
        assert_eq!(clock.now_us(), 2);

        clock.advance_us(10);
        assert_eq!(timer.now_us(), 12);
    }
}
