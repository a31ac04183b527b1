//! MPU6050 burst decoding and sensitivity scaling
//!
//! The 14-byte burst starting at ACCEL_XOUT_H holds big-endian accel X/Y/Z,
//! temperature, then gyro X/Y/Z.

/// Length of the accel/temp/gyro burst.
pub const BURST_LEN: usize = 14;

/// Accelerometer full-scale range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccelRange {
    /// ±2 g, 16384 LSB/g
    #[default]
    G2,
    /// ±4 g, 8192 LSB/g
    G4,
    /// ±8 g, 4096 LSB/g
    G8,
    /// ±16 g, 2048 LSB/g
    G16,
}

impl AccelRange {
    /// AFS_SEL field value (bits 4:3 of ACCEL_CONFIG).
    pub const fn register_value(self) -> u8 {
        (self as u8) << 3
    }

    /// Sensitivity in LSB per g.
    pub const fn lsb_per_g(self) -> f32 {
        match self {
            AccelRange::G2 => 16384.0,
            AccelRange::G4 => 8192.0,
            AccelRange::G8 => 4096.0,
            AccelRange::G16 => 2048.0,
        }
    }
}

/// Gyroscope full-scale range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GyroRange {
    /// ±250 °/s, 131 LSB/(°/s)
    #[default]
    Dps250,
    /// ±500 °/s, 65.5 LSB/(°/s)
    Dps500,
    /// ±1000 °/s, 32.8 LSB/(°/s)
    Dps1000,
    /// ±2000 °/s, 16.4 LSB/(°/s)
    Dps2000,
}

impl GyroRange {
    /// FS_SEL field value (bits 4:3 of GYRO_CONFIG).
    pub const fn register_value(self) -> u8 {
        (self as u8) << 3
    }

    /// Sensitivity in LSB per degree/second.
    pub const fn lsb_per_dps(self) -> f32 {
        match self {
            GyroRange::Dps250 => 131.0,
            GyroRange::Dps500 => 65.5,
            GyroRange::Dps1000 => 32.8,
            GyroRange::Dps2000 => 16.4,
        }
    }
}

/// Raw signed counts from one burst (temperature skipped).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawInertial {
    pub accel: [i16; 3],
    pub gyro: [i16; 3],
}

/// Decode the 14-byte burst.
pub fn decode_burst(buf: &[u8; BURST_LEN]) -> RawInertial {
    let word = |i: usize| i16::from_be_bytes([buf[i], buf[i + 1]]);

    RawInertial {
        accel: [word(0), word(2), word(4)],
        // bytes 6..8 are the die temperature
        gyro: [word(8), word(10), word(12)],
    }
}

/// Convert raw accelerometer counts to g.
pub fn accel_to_g(raw: i16, range: AccelRange) -> f32 {
    raw as f32 / range.lsb_per_g()
}

/// Convert raw gyroscope counts to degrees/second.
pub fn gyro_to_dps(raw: i16, range: GyroRange) -> f32 {
    raw as f32 / range.lsb_per_dps()
}
