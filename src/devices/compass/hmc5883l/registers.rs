//! HMC5883L Register Definitions

/// Fixed I2C address
pub const ADDR: u8 = 0x1E;

pub const CONFIG_A: u8 = 0x00;
pub const CONFIG_B: u8 = 0x01;
pub const MODE: u8 = 0x02;

/// First data register; axes follow in X, Z, Y order
pub const DATA_X_MSB: u8 = 0x03;

/// 8-sample average, 15 Hz output rate, normal measurement
pub const CONFIG_A_DEFAULT: u8 = 0x70;

/// Gain 1090 LSB/gauss (±1.3 Ga)
pub const CONFIG_B_DEFAULT: u8 = 0x20;

pub const MODE_CONTINUOUS: u8 = 0x00;
pub const MODE_IDLE: u8 = 0x03;
