#![cfg_attr(not(any(test, feature = "mock")), no_std)]

//! rocket_avionics - Sensor acquisition and flight-phase detection for a model rocket
//!
//! This library provides the platform abstraction, register-level sensor drivers
//! and the flight computer that feeds their readings into the phase detector from
//! `rocket_avionics_core`.

// Logging macros (must come first so later modules see them)
#[macro_use]
pub mod logging;

// Platform abstraction layer (I2C, GPIO, timer, PWM)
pub mod platform;

// Device drivers using platform abstraction
pub mod devices;

// Flight computer: sensor polling, sanity pass and phase side effects
pub mod flight;

pub use rocket_avionics_core as core_logic;
