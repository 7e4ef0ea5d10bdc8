//! Saturating range clamps.
//!
//! Conversions that quantize to 8-bit channels must absorb out-of-range
//! values instead of failing; these helpers provide that final clamp.

/// Clamps an integer to [lo, hi].
///
/// Returns `min(hi, max(lo, input))`.
///
/// # Example
///
/// ```rust
/// use tonal_math::clamp_int;
///
/// assert_eq!(clamp_int(0, 255, -12), 0);
/// assert_eq!(clamp_int(0, 255, 300), 255);
/// assert_eq!(clamp_int(0, 255, 128), 128);
/// ```
#[inline]
pub fn clamp_int(lo: i32, hi: i32, input: i32) -> i32 {
    input.max(lo).min(hi)
}

/// Clamps a float to [lo, hi].
///
/// Returns `min(hi, max(lo, input))`.
#[inline]
pub fn clamp_double(lo: f64, hi: f64, input: f64) -> f64 {
    input.max(lo).min(hi)
}
