//! MPU-6050 Register Definitions
//!
//! Based on the MPU-6000/MPU-6050 Register Map (RM-MPU-6000A-00).

use bitflags::bitflags;

// ============================================================================
// I2C Address
// ============================================================================

/// I2C address when AD0 pin is low
pub const ADDR: u8 = 0x68;

/// I2C address when AD0 pin is high
pub const ADDR_ALT: u8 = 0x69;

// ============================================================================
// Registers
// ============================================================================

/// Frame sync and digital low-pass filter (DLPF_CFG in bits 2:0)
pub const CONFIG: u8 = 0x1A;

/// Gyroscope configuration (FS_SEL in bits 4:3)
pub const GYRO_CONFIG: u8 = 0x1B;

/// Accelerometer configuration (AFS_SEL in bits 4:3)
pub const ACCEL_CONFIG: u8 = 0x1C;

/// First register of the accel/temp/gyro output block
pub const ACCEL_XOUT_H: u8 = 0x3B;

pub const PWR_MGMT_1: u8 = 0x6B;

pub const WHO_AM_I: u8 = 0x75;
pub const WHO_AM_I_VALUE: u8 = 0x68;

bitflags! {
    /// PWR_MGMT_1 bits
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PowerManagement: u8 {
        const DEVICE_RESET = 0x80;
        const SLEEP = 0x40;
        const CYCLE = 0x20;
        const TEMP_DIS = 0x08;
    }
}
