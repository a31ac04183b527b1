//! BMP280 Register Definitions
//!
//! Based on the BMP280 datasheet (BST-BMP280-DS001).

use bitflags::bitflags;

/// I2C address with SDO low
pub const ADDR_PRIMARY: u8 = 0x76;

/// I2C address with SDO high
pub const ADDR_SECONDARY: u8 = 0x77;

/// First calibration register (dig_T1 LSB)
pub const CALIB_START: u8 = 0x88;

pub const CHIP_ID: u8 = 0xD0;
pub const CHIP_ID_VALUE: u8 = 0x58;

pub const STATUS: u8 = 0xF3;

/// osrs_t[7:5] osrs_p[4:2] mode[1:0]
pub const CTRL_MEAS: u8 = 0xF4;

/// t_sb[7:5] filter[4:2] spi3w_en[0]
pub const CONFIG: u8 = 0xF5;

/// Pressure MSB, LSB, XLSB
pub const PRESS_MSB: u8 = 0xF7;

/// Temperature MSB, LSB, XLSB
pub const TEMP_MSB: u8 = 0xFA;

/// Mask of the mode field in CTRL_MEAS
pub const MODE_MASK: u8 = 0b11;

bitflags! {
    /// STATUS register bits
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Status: u8 {
        /// Conversion running
        const MEASURING = 0x08;
        /// NVM data being copied to image registers
        const IM_UPDATE = 0x01;
    }
}
