//! Barometric altitude
//!
//! International barometric formula, valid in the troposphere.

/// Standard sea-level pressure in hPa.
pub const STANDARD_SEA_LEVEL_HPA: f32 = 1013.25;

const SCALE_M: f32 = 44330.0;
const EXPONENT: f32 = 0.1903;

/// Altitude in metres for a pressure in Pa against a sea-level reference in hPa.
pub fn pressure_to_altitude(pressure_pa: f32, sea_level_hpa: f32) -> f32 {
    let ratio = (pressure_pa / 100.0) / sea_level_hpa;
    SCALE_M * (1.0 - libm::powf(ratio, EXPONENT))
}

/// Pressure in Pa that [`pressure_to_altitude`] maps to `altitude_m`.
pub fn altitude_to_pressure(altitude_m: f32, sea_level_hpa: f32) -> f32 {
    let base = 1.0 - altitude_m / SCALE_M;
    sea_level_hpa * 100.0 * libm::powf(base, 1.0 / EXPONENT)
}
