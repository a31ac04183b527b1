//! Flight computer
//!
//! Wires the sensor drivers into the phase detector from
//! `rocket_avionics_core::flight`. One call to [`update`] is one poll of the
//! external driver loop:
//!
//! 1. one-time sanity pass (PRELAUNCH only, advisory)
//! 2. sensor reads; a failed read means no new data this cycle
//! 3. detector step
//! 4. one-shot side effects on entering POSTLAND (power-down, beacon)
//! 5. recovery location logging in DESCENT and POSTLAND
//!
//! All state lives in the caller-owned [`FlightComputerContext`].

mod computer;


pub use computer::{update, FlightComputerConfig, FlightComputerContext, LastReadings};
pub use rocket_avionics_core::flight::{
    CheckOutcome, FlightPhase, PhaseActions, PhaseTransition, PhaseUpdate, SanityLimits,
    SanityReport, Thresholds,
};
