//! Timer interface trait

use crate::platform::Result;
use rocket_avionics_core::traits::TimeSource;

/// Monotonic microsecond timer with blocking delays
pub trait TimerInterface {
    /// Busy-wait for `us` microseconds
    fn delay_us(&mut self, us: u32) -> Result<()>;

    /// Block for `ms` milliseconds
    fn delay_ms(&mut self, ms: u32) -> Result<()> {
        self.delay_us(ms.saturating_mul(1000))
    }

    /// Microseconds since boot, never decreasing
    fn now_us(&self) -> u64;

    /// Milliseconds since boot
    fn now_ms(&self) -> u64 {
        self.now_us() / 1000
    }
}

impl<T: TimerInterface + ?Sized> TimerInterface for &mut T {
    fn delay_us(&mut self, us: u32) -> Result<()> {
        (**self).delay_us(us)
    }

    fn delay_ms(&mut self, ms: u32) -> Result<()> {
        (**self).delay_ms(ms)
    }

    fn now_us(&self) -> u64 {
        (**self).now_us()
    }
}

/// Exposes a platform timer as the core crate's [`TimeSource`]
pub struct TimerTimeSource<'a, T: TimerInterface + ?Sized>(pub &'a T);

impl<T: TimerInterface + ?Sized> TimeSource for TimerTimeSource<'_, T> {
    fn now_ms(&self) -> u64 {
        self.0.now_ms()
    }

    fn now_us(&self) -> u64 {
        self.0.now_us()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::MockTimer;

    #[test]
    fn test_timer_drives_time_source() {
        let mut timer = MockTimer::new();
        timer.delay_ms(2500).unwrap();
        timer.delay_us(750).unwrap();

        let time = TimerTimeSource(&timer);
        assert_eq!(time.now_ms(), 2500);
        assert_eq!(time.now_us(), 2_500_750);
        assert_eq!(time.elapsed_ms_since(1000), 1500);
    }
}
