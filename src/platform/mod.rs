//! Platform abstraction layer
//!
//! Drivers only see the traits defined here. Concrete buses and pins come
//! from the `embedded-hal` adapters on hardware and from [`mock`] on host.

pub mod error;
pub mod shared_i2c;
pub mod traits;

#[cfg(feature = "embedded-hal")]
pub mod hal;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{PlatformError, Result};
pub use shared_i2c::SharedI2c;
pub use traits::{
    GpioInterface, GpioMode, I2cConfig, I2cInterface, PwmConfig, PwmInterface, TimerInterface,
    TimerTimeSource,
};
