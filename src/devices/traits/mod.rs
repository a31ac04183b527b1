//! Device traits
//!
//! Capability interfaces the flight computer polls. Each concrete sensor is
//! one implementation; the flight computer never names a driver type.
//!
//! The collaborators at the bottom (beacon, GPS, storage) are implemented
//! outside this crate.

pub mod barometer;
pub mod beacon;
pub mod compass;
pub mod gps;
pub mod hygrometer;
pub mod imu;
pub mod storage;

pub use barometer::{BaroReading, Barometer, Pressure, Temperature};
pub use beacon::Beacon;
pub use compass::Compass;
pub use gps::GpsReceiver;
pub use hygrometer::{Hygrometer, HumidityReading};
pub use imu::{ImuSample, InertialSensor};
pub use storage::{RecoveryStorage, StorageError};
