//! Fixed-point conversion helpers for the packet fields.
//!
//! - Q8.24 signed for the inverse double area
//! - 16-bit unsigned pixel coordinates, clamped to the raster
//! - 16-bit signed depth, NDC z scaled by 255

use ::fixed::types::I8F24;

/// Scale of one unit in Q8.24.
pub const Q8_24_ONE: f32 = (1u32 << raster_registers::INV_AREA_FRAC_BITS) as f32;

/// Scale applied to NDC z before truncation.
pub const DEPTH_SCALE: f32 = 255.0;

/// Convert f32 to Q8.24, truncating toward zero.
///
/// Range: -128.0 to +127.99999994. Out-of-range values saturate, NaN maps
/// to zero.
pub fn f32_to_8_24(val: f32) -> I8F24 {
    I8F24::from_bits((val * Q8_24_ONE) as i32)
}

/// Clamp a truncated screen coordinate to a pixel index in `0..=max`.
pub fn clamp_to_pixel(val: i32, max: u16) -> u16 {
    val.clamp(0, max as i32) as u16
}

/// Quantize NDC depth (0.0 = near, 1.0 = far) to the signed 16-bit field.
pub fn ndc_depth_to_i16(ndc_z: f32) -> i16 {
    (ndc_z * DEPTH_SCALE) as i16
}
