//! DHT11 Driver Implementation

use rocket_avionics_core::sensors::dht11::{decode, FRAME_LEN};

use super::config::Dht11Config;
use crate::devices::traits::{HumidityReading, Hygrometer};
use crate::devices::{Result, SensorError};
use crate::platform::{GpioInterface, GpioMode, TimerInterface};

/// Protocol progress of the current (or last) transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dht11State {
    #[default]
    Idle,
    StartSent,
    AwaitResponseLow,
    AwaitResponseHigh,
    ReadBits,
    VerifyChecksum,
    Done,
    Timeout,
    CrcError,
}

/// DHT11 driver
pub struct Dht11<P, T> {
    pin: P,
    timer: T,
    config: Dht11Config,
    state: Dht11State,
}

impl<P: GpioInterface, T: TimerInterface> Dht11<P, T> {
    /// Validate timing and leave the line released
    pub fn new(mut pin: P, timer: T, config: Dht11Config) -> Result<Self> {
        config.validate()?;
        pin.set_mode(GpioMode::InputPullUp)?;
        crate::log_info!("DHT11 initialized");
        Ok(Self {
            pin,
            timer,
            config,
            state: Dht11State::Idle,
        })
    }

    pub fn state(&self) -> Dht11State {
        self.state
    }

    pub fn release(self) -> (P, T) {
        (self.pin, self.timer)
    }

    /// Run one complete transfer
    pub fn read_frame(&mut self) -> Result<HumidityReading> {
        let result = self.transfer();
        match &result {
            Ok(reading) => {
                self.state = Dht11State::Done;
                crate::log_debug!(
                    "DHT11 {} C {} %",
                    reading.temperature_c,
                    reading.humidity_pct
                );
            }
            Err(SensorError::Timeout(stage)) => {
                self.state = Dht11State::Timeout;
                crate::log_error!("DHT11 timeout during {}", stage);
            }
            Err(SensorError::Checksum { expected, actual }) => {
                self.state = Dht11State::CrcError;
                crate::log_error!("DHT11 CRC mismatch: expected {} got {}", expected, actual);
            }
            Err(e) => {
                self.state = Dht11State::Idle;
                crate::log_error!("DHT11 read failed: {}", e);
            }
        }
        result
    }

    fn transfer(&mut self) -> Result<HumidityReading> {
        self.state = Dht11State::Idle;
        self.send_start()?;
        self.state = Dht11State::StartSent;

        self.state = Dht11State::AwaitResponseLow;
        self.wait_level(false, "response low")?;
        self.state = Dht11State::AwaitResponseHigh;
        self.wait_level(true, "response high")?;

        self.state = Dht11State::ReadBits;
        let mut frame = [0u8; FRAME_LEN];
        for byte in frame.iter_mut() {
            for _ in 0..8 {
                *byte = (*byte << 1) | self.read_bit()? as u8;
            }
        }

        self.state = Dht11State::VerifyChecksum;
        let reading = decode(&frame).map_err(|m| SensorError::Checksum {
            expected: m.expected,
            actual: m.actual,
        })?;

        Ok(HumidityReading {
            temperature_c: reading.temperature_c,
            humidity_pct: reading.humidity_pct,
        })
    }

    fn send_start(&mut self) -> Result<()> {
        self.pin.set_mode(GpioMode::OutputOpenDrain)?;
        self.pin.set_low()?;
        self.timer.delay_ms(self.config.start_low_ms)?;
        self.pin.set_high()?;
        self.timer.delay_us(self.config.release_us)?;
        self.pin.set_mode(GpioMode::InputPullUp)?;
        Ok(())
    }

    fn read_bit(&mut self) -> Result<bool> {
        self.wait_level(false, "bit low")?;
        self.wait_level(true, "bit high")?;
        self.timer.delay_us(self.config.sample_delay_us)?;
        let bit = self.pin.read();
        self.wait_level(false, "bit end")?;
        Ok(bit)
    }

    /// Busy-wait until the line reads `high`, bounded by `wait_timeout_us`
    fn wait_level(&mut self, high: bool, stage: &'static str) -> Result<()> {
        let start = self.timer.now_us();
        let bound = self.config.wait_timeout_us as u64;
        while self.pin.read() != high {
            if self.timer.now_us().saturating_sub(start) > bound {
                return Err(SensorError::Timeout(stage));
            }
        }
        Ok(())
    }
}

impl<P: GpioInterface, T: TimerInterface> Hygrometer for Dht11<P, T> {
    fn read(&mut self) -> Result<HumidityReading> {
        self.read_frame()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::{MockClock, MockGpio, MockTimer, PinEvent, Waveform};
    use rocket_avionics_core::sensors::dht11::encode;

    fn sensor_with(waveform: Waveform) -> Dht11<MockGpio, MockTimer> {
        let clock = MockClock::new();
        let mut pin = MockGpio::with_clock(clock.clone(), GpioMode::InputPullUp);
        pin.set_input_state(true);
        pin.script_input(waveform);
        let timer = MockTimer::with_clock(clock, 1);
        Dht11::new(pin, timer, Dht11Config::default()).unwrap()
    }

    #[test]
    fn test_reads_valid_frame() {
        let frame = encode([45, 0, 23, 0]);
        let mut dht = sensor_with(Waveform::dht11(&frame));

        let reading = dht.read().unwrap();
        assert_eq!(
            reading,
            HumidityReading {
                temperature_c: 23,
                humidity_pct: 45
            }
        );
        assert_eq!(dht.state(), Dht11State::Done);
    }

    #[test]
    fn test_reads_all_ones_and_zeros() {
        for payload in [[0, 0, 0, 0], [0xFF, 0xFF, 0xFF, 0x00], [90, 0, 50, 0]] {
            let frame = encode(payload);
            let mut dht = sensor_with(Waveform::dht11(&frame));
            let reading = dht.read().unwrap();
            assert_eq!(reading.humidity_pct, payload[0]);
            assert_eq!(reading.temperature_c, payload[2]);
        }
    }

    #[test]
    fn test_start_pulse_timing() {
        let frame = encode([45, 0, 23, 0]);
        let mut dht = sensor_with(Waveform::dht11(&frame));
        dht.read().unwrap();
        let (pin, _) = dht.release();

        let levels = pin.level_changes();
        assert_eq!(levels.len(), 2);
        assert!(!levels[0].1);
        assert!(levels[1].1);
        assert!(levels[1].0 - levels[0].0 >= 18_000);

        let release_at = pin
            .history()
            .iter()
            .rev()
            .find_map(|e| match e {
                PinEvent::Mode { at_us, mode } if !mode.is_output() => Some(*at_us),
                _ => None,
            })
            .unwrap();
        let released_for = release_at - levels[1].0;
        assert!((20..=40).contains(&released_for), "{}", released_for);
    }

    #[test]
    fn test_no_response_times_out() {
        let mut dht = sensor_with(Waveform::new());
        assert_eq!(dht.read(), Err(SensorError::Timeout("response low")));
        assert_eq!(dht.state(), Dht11State::Timeout);
    }

    #[test]
    fn test_stuck_low_times_out() {
        let mut dht = sensor_with(Waveform::new().high(20).low(500));
        assert_eq!(dht.read(), Err(SensorError::Timeout("response high")));
        assert_eq!(dht.state(), Dht11State::Timeout);
    }

    #[test]
    fn test_truncated_frame_times_out() {
        let frame = encode([45, 0, 23, 0]);
        // line stays high after the 17th bit, so that bit never ends
        let mut dht = sensor_with(Waveform::dht11_bits(&frame, 17).high(1000));
        assert!(matches!(dht.read(), Err(SensorError::Timeout(_))));
        assert_eq!(dht.state(), Dht11State::Timeout);
    }

    #[test]
    fn test_checksum_mismatch() {
        let mut frame = encode([45, 0, 23, 0]);
        frame[2] ^= 0x04;
        let mut dht = sensor_with(Waveform::dht11(&frame));

        assert_eq!(
            dht.read(),
            Err(SensorError::Checksum {
                expected: 64,
                actual: 68
            })
        );
        assert_eq!(dht.state(), Dht11State::CrcError);
    }

    #[test]
    fn test_retry_after_failure() {
        let frame = encode([40, 0, 21, 0]);
        let mut dht = sensor_with(Waveform::new());
        assert!(dht.read().is_err());

        let (mut pin, timer) = dht.release();
        pin.script_input(Waveform::dht11(&frame));
        let mut dht = Dht11::new(pin, timer, Dht11Config::default()).unwrap();
        assert_eq!(dht.read().unwrap().humidity_pct, 40);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let clock = MockClock::new();
        let pin = MockGpio::with_clock(clock.clone(), GpioMode::InputPullUp);
        let timer = MockTimer::with_clock(clock, 1);
        let config = Dht11Config {
            release_us: 50,
            ..Default::default()
        };
        assert_eq!(
            Dht11::new(pin, timer, config).err(),
            Some(SensorError::InvalidArgument("release_us"))
        );
    }
}
