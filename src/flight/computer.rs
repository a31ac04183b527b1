//! Flight computer context and poll step

use core::fmt::Write;

use heapless::String;
use rocket_avionics_core::altitude::{pressure_to_altitude, STANDARD_SEA_LEVEL_HPA};
use rocket_avionics_core::flight::{
    CheckOutcome, FlightPhase, FlightSample, PhaseDetector, PhaseUpdate, SanityLimits,
    SanityReport, Thresholds,
};
use rocket_avionics_core::traits::TimeSource;

use crate::devices::traits::{
    BaroReading, Barometer, Beacon, Compass, GpsReceiver, HumidityReading, Hygrometer,
    ImuSample, InertialSensor, RecoveryStorage,
};

/// Room for "-90.000000,-180.000000"
const LOCATION_LINE_LEN: usize = 32;

/// Flight computer configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightComputerConfig {
    /// Reference pressure for altitude (hPa)
    pub sea_level_hpa: f32,
    /// Recovery beacon tone (Hz)
    pub beacon_tone_hz: u32,
    /// File the recovery location is appended to
    pub recovery_log_path: &'static str,
    pub thresholds: Thresholds,
    pub sanity_limits: SanityLimits,
}

impl Default for FlightComputerConfig {
    fn default() -> Self {
        Self {
            sea_level_hpa: STANDARD_SEA_LEVEL_HPA,
            beacon_tone_hz: 2000,
            recovery_log_path: "/recovery.txt",
            thresholds: Thresholds::default(),
            sanity_limits: SanityLimits::default(),
        }
    }
}

/// Most recent successful reading of each sensor
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LastReadings {
    pub baro: Option<BaroReading>,
    pub altitude_m: Option<f32>,
    pub humidity: Option<HumidityReading>,
    pub imu: Option<ImuSample>,
    pub heading_deg: Option<f32>,
    pub location: Option<(f64, f64)>,
}

/// Everything the flight computer needs between polls
///
/// Sensors and collaborators are optional; a missing one is skipped by the
/// sanity pass and contributes no data.
pub struct FlightComputerContext<'a, T: TimeSource> {
    barometer: Option<&'a mut dyn Barometer>,
    hygrometer: Option<&'a mut dyn Hygrometer>,
    imu: Option<&'a mut dyn InertialSensor>,
    compass: Option<&'a mut dyn Compass>,
    gps: Option<&'a mut dyn GpsReceiver>,
    beacon: Option<&'a mut dyn Beacon>,
    storage: Option<&'a mut dyn RecoveryStorage>,
    time: T,
    config: FlightComputerConfig,
    detector: PhaseDetector,
    last: LastReadings,
    sanity_report: Option<SanityReport>,
}

impl<'a, T: TimeSource> FlightComputerContext<'a, T> {
    pub fn new(time: T, config: FlightComputerConfig) -> Self {
        crate::log_info!("Flight computer initialized: PRELAUNCH");
        Self {
            barometer: None,
            hygrometer: None,
            imu: None,
            compass: None,
            gps: None,
            beacon: None,
            storage: None,
            time,
            detector: PhaseDetector::new(config.thresholds),
            config,
            last: LastReadings::default(),
            sanity_report: None,
        }
    }

    pub fn with_barometer(mut self, barometer: &'a mut dyn Barometer) -> Self {
        self.barometer = Some(barometer);
        self
    }

    pub fn with_hygrometer(mut self, hygrometer: &'a mut dyn Hygrometer) -> Self {
        self.hygrometer = Some(hygrometer);
        self
    }

    pub fn with_imu(mut self, imu: &'a mut dyn InertialSensor) -> Self {
        self.imu = Some(imu);
        self
    }

    pub fn with_compass(mut self, compass: &'a mut dyn Compass) -> Self {
        self.compass = Some(compass);
        self
    }

    pub fn with_gps(mut self, gps: &'a mut dyn GpsReceiver) -> Self {
        self.gps = Some(gps);
        self
    }

    pub fn with_beacon(mut self, beacon: &'a mut dyn Beacon) -> Self {
        self.beacon = Some(beacon);
        self
    }

    pub fn with_storage(mut self, storage: &'a mut dyn RecoveryStorage) -> Self {
        self.storage = Some(storage);
        self
    }

    pub fn phase(&self) -> FlightPhase {
        self.detector.phase()
    }

    pub fn detector(&self) -> &PhaseDetector {
        &self.detector
    }

    pub fn config(&self) -> &FlightComputerConfig {
        &self.config
    }

    pub fn last_readings(&self) -> &LastReadings {
        &self.last
    }

    /// Outcome of the sanity pass, once it has run
    pub fn sanity_report(&self) -> Option<&SanityReport> {
        self.sanity_report.as_ref()
    }

    fn read_barometer(&mut self) -> Option<BaroReading> {
        let baro = self.barometer.as_deref_mut()?;
        match baro.read() {
            Ok(reading) => {
                self.last.baro = Some(reading);
                Some(reading)
            }
            Err(e) => {
                crate::log_warn!("Barometer read failed: {}", e);
                None
            }
        }
    }

    fn read_imu(&mut self) -> Option<ImuSample> {
        let imu = self.imu.as_deref_mut()?;
        match imu.read() {
            Ok(sample) => {
                self.last.imu = Some(sample);
                Some(sample)
            }
            Err(e) => {
                crate::log_warn!("IMU read failed: {}", e);
                None
            }
        }
    }

    fn altitude_from(&mut self, reading: &BaroReading) -> f32 {
        let altitude = pressure_to_altitude(reading.pressure.pascals as f32, self.config.sea_level_hpa);
        self.last.altitude_m = Some(altitude);
        altitude
    }

    fn run_sanity_check(&mut self) {
        let limits = self.config.sanity_limits;
        let mut report = SanityReport::default();

        if self.barometer.is_some() {
            match self.read_barometer() {
                Some(reading) => {
                    report.baro_temperature =
                        limits.check_baro_temperature(reading.temperature.celsius());
                    report.baro_pressure = limits.check_baro_pressure(reading.pressure.hpa());
                }
                None => {
                    report.baro_temperature = CheckOutcome::Failed;
                    report.baro_pressure = CheckOutcome::Failed;
                }
            }
        }

        if let Some(hygro) = self.hygrometer.as_deref_mut() {
            match hygro.read() {
                Ok(reading) => {
                    self.last.humidity = Some(reading);
                    report.hygro_temperature =
                        limits.check_hygro_temperature(reading.temperature_c as f32);
                    report.hygro_humidity = limits.check_hygro_humidity(reading.humidity_pct as f32);
                }
                Err(e) => {
                    crate::log_warn!("Hygrometer read failed: {}", e);
                    report.hygro_temperature = CheckOutcome::Failed;
                    report.hygro_humidity = CheckOutcome::Failed;
                }
            }
        }

        if self.imu.is_some() {
            report.accel_magnitude = match self.read_imu() {
                Some(sample) => limits.check_accel_magnitude(sample.accel_magnitude_g()),
                None => CheckOutcome::Failed,
            };
        }

        if let Some(compass) = self.compass.as_deref_mut() {
            report.heading = match compass.read_heading() {
                Ok(heading) => {
                    self.last.heading_deg = Some(heading);
                    limits.check_heading(heading)
                }
                Err(e) => {
                    crate::log_warn!("Compass read failed: {}", e);
                    CheckOutcome::Failed
                }
            };
        }

        if let Some(gps) = self.gps.as_deref_mut() {
            report.gps_fix = CheckOutcome::from_bool(gps.has_fix());
        }

        for (name, outcome) in report.entries() {
            match outcome {
                CheckOutcome::Passed => crate::log_info!("{} sanity check PASSED", name),
                CheckOutcome::Failed => crate::log_warn!("{} sanity check FAILED", name),
                CheckOutcome::Skipped => crate::log_debug!("{} not fitted, skipped", name),
            }
        }

        self.sanity_report = Some(report);
    }

    fn sample(&mut self, timestamp_ms: u64) -> FlightSample {
        let altitude_m = self
            .read_barometer()
            .map(|reading| self.altitude_from(&reading));
        let accel_magnitude_g = self.read_imu().map(|sample| sample.accel_magnitude_g());

        FlightSample {
            timestamp_ms,
            altitude_m,
            accel_magnitude_g,
        }
    }

    fn power_down_sensors(&mut self) {
        if let Some(imu) = self.imu.as_deref_mut() {
            if let Err(e) = imu.power_down() {
                crate::log_warn!("IMU power-down failed (ignored): {}", e);
            }
        }
        if let Some(compass) = self.compass.as_deref_mut() {
            if let Err(e) = compass.power_down() {
                crate::log_warn!("Compass power-down failed (ignored): {}", e);
            }
        }
        if let Some(baro) = self.barometer.as_deref_mut() {
            if let Err(e) = baro.power_down() {
                crate::log_warn!("Barometer power-down failed (ignored): {}", e);
            }
        }
        crate::log_info!("Sensors powered down");
    }

    fn arm_beacon(&mut self) {
        let tone_hz = self.config.beacon_tone_hz;
        match self.beacon.as_deref_mut() {
            Some(beacon) => {
                if let Err(e) = beacon.arm_beacon(tone_hz) {
                    crate::log_warn!("Beacon arm failed (ignored): {}", e);
                }
            }
            None => crate::log_warn!("No beacon fitted"),
        }
    }

    fn log_location(&mut self) {
        let Some(gps) = self.gps.as_deref_mut() else {
            return;
        };
        if !gps.has_fix() {
            return;
        }
        let Some((lat, lon)) = gps.current_fix_location() else {
            return;
        };
        self.last.location = Some((lat, lon));

        let Some(storage) = self.storage.as_deref_mut() else {
            return;
        };
        let mut line: String<LOCATION_LINE_LEN> = String::new();
        if write!(line, "{:.6},{:.6}", lat, lon).is_err() {
            crate::log_warn!("Location line overflow");
            return;
        }
        if let Err(e) = storage.append_line(self.config.recovery_log_path, &line) {
            crate::log_warn!("Recovery log write failed (ignored): {}", e);
        }
    }
}

/// Run one poll of the flight computer
pub fn update<T: TimeSource>(ctx: &mut FlightComputerContext<'_, T>) -> PhaseUpdate {
    let now_ms = ctx.time.now_ms();

    if ctx.detector.needs_sanity_check() {
        ctx.run_sanity_check();
        ctx.detector.mark_sanity_check_done();
    }

    // in POSTLAND the flight sensors are powered down; only location is polled
    let sample = if ctx.detector.phase().is_terminal() {
        FlightSample {
            timestamp_ms: now_ms,
            ..Default::default()
        }
    } else {
        ctx.sample(now_ms)
    };

    let update = ctx.detector.update(&sample);

    if let Some(transition) = update.transition {
        crate::log_info!(
            "Transition {} -> {} at {} ms",
            transition.from.label(),
            transition.to.label(),
            transition.at_ms
        );
    }
    if update.actions.power_down {
        ctx.power_down_sensors();
    }
    if update.actions.arm_beacon {
        ctx.arm_beacon();
    }

    if matches!(update.phase, FlightPhase::Descent | FlightPhase::PostLand) {
        ctx.log_location();
    }

    update
}
