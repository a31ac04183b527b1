//! Core traits for platform-agnostic avionics functionality.
//!
//! # Design
//!
//! - Trait definitions are pure and have no feature gates
//! - Mock implementations are always available for host testing
//! - Hardware-backed implementations live in the root crate or the application

pub mod time;

pub use time::{MockTime, TimeSource};
