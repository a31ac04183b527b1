//! DHT11 single-wire frame codec
//!
//! A transfer carries 40 bits, most significant bit first, forming five bytes:
//! humidity integer, humidity fraction, temperature integer, temperature
//! fraction and an 8-bit truncated sum of the first four.

use core::fmt;

/// Number of bytes in one frame.
pub const FRAME_LEN: usize = 5;

/// Number of data bits in one frame.
pub const FRAME_BITS: usize = FRAME_LEN * 8;

/// Decoded single-wire reading.
///
/// This sensor class reports whole units only; the fraction bytes are carried
/// on the wire but always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dht11Reading {
    /// Relative humidity in percent
    pub humidity_pct: u8,
    /// Temperature in degrees Celsius
    pub temperature_c: u8,
}

/// Frame integrity failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecksumMismatch {
    /// Sum computed over the first four bytes
    pub expected: u8,
    /// Checksum byte received on the wire
    pub actual: u8,
}

impl fmt::Display for ChecksumMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "checksum mismatch: expected {:#04x}, got {:#04x}",
            self.expected, self.actual
        )
    }
}

/// 8-bit truncated sum of the payload bytes.
pub fn checksum(payload: &[u8]) -> u8 {
    payload.iter().fold(0u8, |acc, b| acc.wrapping_add(*b))
}

/// Build a frame as the sensor would put it on the wire.
pub fn encode(payload: [u8; 4]) -> [u8; FRAME_LEN] {
    [
        payload[0],
        payload[1],
        payload[2],
        payload[3],
        checksum(&payload),
    ]
}

/// Verify and decode a received frame.
pub fn decode(frame: &[u8; FRAME_LEN]) -> Result<Dht11Reading, ChecksumMismatch> {
    let expected = checksum(&frame[..4]);
    if expected != frame[4] {
        return Err(ChecksumMismatch {
            expected,
            actual: frame[4],
        });
    }

    Ok(Dht11Reading {
        humidity_pct: frame[0],
        temperature_c: frame[2],
    })
}

/// Bit `index` (0..40, MSB of byte 0 first) of a frame.
pub fn frame_bit(frame: &[u8; FRAME_LEN], index: usize) -> bool {
    (frame[index / 8] >> (7 - index % 8)) & 1 == 1
}
