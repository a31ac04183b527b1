//! rocket_avionics_core - Pure no_std logic for the rocket avionics unit
//!
//! This crate contains the numeric and decision-making parts of the avionics
//! stack that can be tested on host without any hardware or feature flags.
//!
//! # Design Principles
//!
//! - **Zero cfg**: No `#[cfg(feature = ...)]` directives
//! - **Pure no_std**: No std library dependencies, no I/O
//! - **Trait abstractions**: Platform services (time) injected via traits
//!
//! # Modules
//!
//! - [`traits`]: Platform-agnostic trait abstractions (TimeSource)
//! - [`sensors`]: Register decoding and compensation math per sensor
//! - [`altitude`]: Barometric altitude formula
//! - [`flight`]: Flight phases, thresholds, sanity limits and phase detection

#![no_std]

pub mod altitude;
pub mod flight;
pub mod sensors;
pub mod traits;
