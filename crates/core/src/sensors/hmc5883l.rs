//! HMC5883L burst decoding and heading

/// Length of the X/Z/Y data burst starting at DATA_X_MSB.
pub const BURST_LEN: usize = 6;

/// Raw magnetometer counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawMagnetic {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

/// Decode the burst; the device orders axes X, Z, Y.
pub fn decode_burst(buf: &[u8; BURST_LEN]) -> RawMagnetic {
    RawMagnetic {
        x: i16::from_be_bytes([buf[0], buf[1]]),
        z: i16::from_be_bytes([buf[2], buf[3]]),
        y: i16::from_be_bytes([buf[4], buf[5]]),
    }
}

/// Heading in degrees, normalized to `[0, 360)`.
pub fn heading_deg(raw: RawMagnetic) -> f32 {
    let heading = libm::atan2f(raw.y as f32, raw.x as f32).to_degrees();
    let heading = if heading < 0.0 { heading + 360.0 } else { heading };
    // -tiny + 360 rounds to 360 in f32
    if heading >= 360.0 {
        0.0
    } else {
        heading
    }
}
