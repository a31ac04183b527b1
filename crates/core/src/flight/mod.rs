//! Flight Phase Detection
//!
//! Pure phase logic for a single-flight vehicle. The detector consumes one
//! [`FlightSample`] per poll and reports the resulting phase together with any
//! one-shot actions the caller must perform. Sensor access, logging and side
//! effects live in the firmware-facing crate.
//!
//! # Phases
//!
//! ```text
//! PRELAUNCH --(+10 m or +0.5 g)--> ASCENT --(-1 m)--> DESCENT --(<2 m for 3 s)--> POSTLAND
//! ```

mod detector;
mod phase;
mod sanity;
mod thresholds;

pub use detector::{DetectionContext, FlightSample, PhaseActions, PhaseDetector, PhaseUpdate};
pub use phase::{FlightPhase, PhaseTransition};
pub use sanity::{CheckOutcome, SanityLimits, SanityReport};
pub use thresholds::Thresholds;
