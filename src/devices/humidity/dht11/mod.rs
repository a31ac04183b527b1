//! DHT11 single-wire humidity/temperature driver
//!
//! Bit-banged over one open-drain line with pull-up. The host pulls the line
//! low for at least 18 ms, releases it, and the sensor answers with an
//! 80 µs low / 80 µs high preamble followed by 40 data bits. Each bit is a
//! ~50 µs low followed by a high pulse whose width carries the value
//! (~26 µs for 0, ~70 µs for 1), so sampling 40 µs into the high pulse
//! recovers it.
//!
//! Every wait on the line is a bounded busy-wait. Suspending between edges
//! would lose the microsecond timing the protocol depends on.

mod config;
mod driver;

pub use config::Dht11Config;
pub use driver::{Dht11, Dht11State};
