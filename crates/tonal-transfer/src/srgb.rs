//! sRGB transfer function, 8-bit channel form.
//!
//! The sRGB standard uses a piecewise function combining a linear segment
//! near black with a power curve (approximately gamma 2.2) for the rest.
//! Unlike the normalized [0, 1] form, this module works on 8-bit encoded
//! channels and scales linear light to [0, 100], matching
//! material-color-utilities.
//!
//! # Range
//!
//! - Encoded: integer [0, 255]
//! - Linear: [0.0, 100.0]
//!
//! # Reference
//!
//! IEC 61966-2-1:1999, with material-color-utilities' exact thresholds.

use tonal_math::clamp_int;

/// Linearizes an 8-bit sRGB channel.
///
/// Converts a gamma-encoded channel in [0, 255] to linear light in
/// [0.0, 100.0].
///
/// # Formula
///
/// ```text
/// n = c / 255
/// if n <= 0.040449936:
///     L = n / 12.92 * 100
/// else:
///     L = ((n + 0.055) / 1.055)^2.4 * 100
/// ```
///
/// # Example
///
/// ```rust
/// use tonal_transfer::srgb::linearized;
///
/// let linear = linearized(255);
/// assert!((linear - 100.0).abs() < 1e-9);
/// ```
#[inline]
pub fn linearized(rgb_component: u32) -> f64 {
    let normalized = rgb_component as f64 / 255.0;
    if normalized <= 0.040449936 {
        normalized / 12.92 * 100.0
    } else {
        ((normalized + 0.055) / 1.055).powf(2.4) * 100.0
    }
}

/// Delinearizes a linear channel to 8 bits.
///
/// Converts linear light in [0.0, 100.0] to a gamma-encoded channel in
/// [0, 255]. Out-of-range inputs saturate at the clamp; the function is
/// total on all finite inputs and never panics.
///
/// # Formula
///
/// ```text
/// n = v / 100
/// if n <= 0.0031308:
///     d = n * 12.92
/// else:
///     d = 1.055 * n^(1/2.4) - 0.055
/// return clamp(0, 255, round(d * 255))
/// ```
///
/// Rounding is half-away-from-zero (`f64::round`).
///
/// # Example
///
/// ```rust
/// use tonal_transfer::srgb::delinearized;
///
/// assert_eq!(delinearized(100.0), 255);
/// assert_eq!(delinearized(-1000.0), 0);
/// ```
#[inline]
pub fn delinearized(rgb_component: f64) -> u32 {
    let normalized = rgb_component / 100.0;
    let delinearized = if normalized <= 0.0031308 {
        normalized * 12.92
    } else {
        1.055 * normalized.powf(1.0 / 2.4) - 0.055
    };
    clamp_int(0, 255, (delinearized * 255.0).round() as i32) as u32
}
