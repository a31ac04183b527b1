//! BMP280 compensation (Bosch datasheet rev. 1.26, section 8.2)
//!
//! All intermediate arithmetic is signed 64-bit, matching the integer
//! reference code. Temperature compensation yields `t_fine`, which the
//! pressure compensation of the same measurement cycle depends on.

/// Size of the factory calibration block starting at register 0x88.
pub const CALIBRATION_LEN: usize = 24;

/// Pressure value returned when the compensation divisor degenerates to zero.
///
/// Never a physical reading; callers must treat it as invalid.
pub const PRESSURE_SENTINEL: u32 = 0;

/// Factory calibration coefficients (`dig_T1..dig_T3`, `dig_P1..dig_P9`).
///
/// Read once at initialization and immutable afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CalibrationBlock {
    pub dig_t1: u16,
    pub dig_t2: i16,
    pub dig_t3: i16,
    pub dig_p1: u16,
    pub dig_p2: i16,
    pub dig_p3: i16,
    pub dig_p4: i16,
    pub dig_p5: i16,
    pub dig_p6: i16,
    pub dig_p7: i16,
    pub dig_p8: i16,
    pub dig_p9: i16,
}

impl CalibrationBlock {
    /// Parse the 24-byte block of little-endian register pairs.
    pub fn from_bytes(raw: &[u8; CALIBRATION_LEN]) -> Self {
        let u = |i: usize| u16::from_le_bytes([raw[i], raw[i + 1]]);
        let s = |i: usize| i16::from_le_bytes([raw[i], raw[i + 1]]);

        Self {
            dig_t1: u(0),
            dig_t2: s(2),
            dig_t3: s(4),
            dig_p1: u(6),
            dig_p2: s(8),
            dig_p3: s(10),
            dig_p4: s(12),
            dig_p5: s(14),
            dig_p6: s(16),
            dig_p7: s(18),
            dig_p8: s(20),
            dig_p9: s(22),
        }
    }
}

/// Assemble a 20-bit ADC value from MSB, LSB and XLSB register bytes.
pub fn adc_from_bytes(raw: [u8; 3]) -> i32 {
    ((raw[0] as i32) << 12) | ((raw[1] as i32) << 4) | ((raw[2] as i32) >> 4)
}

/// Result of temperature compensation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompensatedTemperature {
    /// Temperature in hundredths of a degree Celsius.
    pub centi_celsius: i32,
    /// Fine temperature carried into pressure compensation.
    pub t_fine: i32,
}

/// Compensate a raw temperature ADC value.
pub fn compensate_temperature(calib: &CalibrationBlock, adc_t: i32) -> CompensatedTemperature {
    let adc_t = adc_t as i64;
    let t1 = calib.dig_t1 as i64;
    let t2 = calib.dig_t2 as i64;
    let t3 = calib.dig_t3 as i64;

    let var1 = (((adc_t >> 3) - (t1 << 1)) * t2) >> 11;
    let delta = (adc_t >> 4) - t1;
    let var2 = (((delta * delta) >> 12) * t3) >> 14;
    let t_fine = var1 + var2;

    CompensatedTemperature {
        centi_celsius: ((t_fine * 5 + 128) >> 8) as i32,
        t_fine: t_fine as i32,
    }
}

/// Compensate a raw pressure ADC value using `t_fine` from the same cycle.
///
/// Returns pressure in whole Pascals, or [`PRESSURE_SENTINEL`] when the
/// `var1` divisor is zero or a corrupted calibration block drives the 64-bit
/// polynomial out of range.
pub fn compensate_pressure(calib: &CalibrationBlock, t_fine: i32, adc_p: i32) -> u32 {
    pressure_q24_8(calib, t_fine, adc_p)
        .and_then(|p| u32::try_from(p).ok())
        .map_or(PRESSURE_SENTINEL, |p| p / 256)
}

/// Datasheet 64-bit pressure polynomial, Q24.8 Pascals
fn pressure_q24_8(calib: &CalibrationBlock, t_fine: i32, adc_p: i32) -> Option<i64> {
    let v = t_fine as i64 - 128_000;
    let v_sq = v.checked_mul(v)?;

    let var2 = v_sq
        .checked_mul(calib.dig_p6 as i64)?
        .checked_add(v.checked_mul(calib.dig_p5 as i64)?.checked_mul(1 << 17)?)?
        .checked_add((calib.dig_p4 as i64).checked_mul(1 << 35)?)?;
    let var1 = (v_sq.checked_mul(calib.dig_p3 as i64)? >> 8)
        .checked_add(v.checked_mul(calib.dig_p2 as i64)?.checked_mul(1 << 12)?)?;
    let var1 = (1i64 << 47).checked_add(var1)?.checked_mul(calib.dig_p1 as i64)? >> 33;

    if var1 == 0 {
        return None;
    }

    let p = (1_048_576 - adc_p as i64)
        .checked_mul(1 << 31)?
        .checked_sub(var2)?
        .checked_mul(3125)?
        .checked_div(var1)?;
    let var1 = (calib.dig_p9 as i64)
        .checked_mul(p >> 13)?
        .checked_mul(p >> 13)?
        >> 25;
    let var2 = (calib.dig_p8 as i64).checked_mul(p)? >> 19;

    (p.checked_add(var1)?.checked_add(var2)? >> 8).checked_add((calib.dig_p7 as i64) << 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Calibration from the datasheet worked example, as register bytes.
    const DATASHEET_CALIB: [u8; CALIBRATION_LEN] = [
        112, 107, 67, 103, 24, 252, 125, 142, 67, 214, 208, 11, 39, 11, 140, 0, 249, 255, 140,
        60, 248, 198, 112, 23,
    ];

    #[test]
    fn parses_datasheet_calibration() {
        let calib = CalibrationBlock::from_bytes(&DATASHEET_CALIB);
        assert_eq!(calib.dig_t1, 27504);
        assert_eq!(calib.dig_t2, 26435);
        assert_eq!(calib.dig_t3, -1000);
        assert_eq!(calib.dig_p1, 36477);
        assert_eq!(calib.dig_p2, -10685);
        assert_eq!(calib.dig_p3, 3024);
        assert_eq!(calib.dig_p4, 2855);
        assert_eq!(calib.dig_p5, 140);
        assert_eq!(calib.dig_p6, -7);
        assert_eq!(calib.dig_p7, 15500);
        assert_eq!(calib.dig_p8, -14600);
        assert_eq!(calib.dig_p9, 6000);
    }

    #[test]
    fn assembles_20_bit_adc() {
        assert_eq!(adc_from_bytes([0x7E, 0xED, 0x00]), 519_888);
        assert_eq!(adc_from_bytes([0x65, 0x5A, 0xC0]), 415_148);
        // low nibble of XLSB is not part of the sample
        assert_eq!(adc_from_bytes([0x65, 0x5A, 0xCF]), 415_148);
    }

    #[test]
    fn datasheet_temperature_vector() {
        let calib = CalibrationBlock::from_bytes(&DATASHEET_CALIB);
        let t = compensate_temperature(&calib, 519_888);
        assert_eq!(t.t_fine, 128_422);
        assert_eq!(t.centi_celsius, 2508);
    }

    #[test]
    fn datasheet_pressure_vector() {
        let calib = CalibrationBlock::from_bytes(&DATASHEET_CALIB);
        let t = compensate_temperature(&calib, 519_888);
        assert_eq!(compensate_pressure(&calib, t.t_fine, 415_148), 100_653);
    }

    #[test]
    fn zero_divisor_yields_sentinel() {
        let mut calib = CalibrationBlock::from_bytes(&DATASHEET_CALIB);
        calib.dig_p1 = 0;
        let t = compensate_temperature(&calib, 519_888);
        assert_eq!(compensate_pressure(&calib, t.t_fine, 415_148), PRESSURE_SENTINEL);
    }

    #[test]
    fn corrupted_calibration_yields_sentinel() {
        let calib = CalibrationBlock {
            dig_t1: 0,
            dig_t2: i16::MAX,
            dig_t3: i16::MAX,
            dig_p1: u16::MAX,
            dig_p3: i16::MAX,
            ..Default::default()
        };
        let t = compensate_temperature(&calib, 0xF_FFFF);
        assert_eq!(compensate_pressure(&calib, t.t_fine, 0x8_0000), PRESSURE_SENTINEL);
    }

    #[test]
    fn pressure_depends_on_t_fine() {
        let calib = CalibrationBlock::from_bytes(&DATASHEET_CALIB);
        let warm = compensate_pressure(&calib, 128_422, 415_148);
        let cold = compensate_pressure(&calib, 50_000, 415_148);
        assert_ne!(warm, cold);
    }
}
