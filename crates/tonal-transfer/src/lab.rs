//! CIE L*a*b* piecewise lightness functions.
//!
//! The Lab forward function compresses relative luminance with a cube root
//! above a small threshold and a linear ramp below it; the inverse undoes
//! both branches.
//!
//! # Range
//!
//! - `t`: relative tristimulus value, nominally [0, 1]
//! - `f(t)`: nominally [4/29, 1]
//!
//! # Reference
//!
//! CIE 15:2004, with the thresholds written as exact rationals.

/// CIE epsilon constant, 216/24389.
///
/// Threshold between the cube-root and linear branches of [`lab_f`].
pub const EPSILON: f64 = 216.0 / 24389.0;

/// CIE kappa constant, 24389/27.
///
/// Slope of the linear branch, scaled so the two branches meet at
/// [`EPSILON`].
pub const KAPPA: f64 = 24389.0 / 27.0;

/// Lab forward function.
///
/// # Formula
///
/// ```text
/// if t > 216/24389:
///     f = t^(1/3)
/// else:
///     f = (kappa * t + 16) / 116
/// ```
///
/// # Example
///
/// ```rust
/// use tonal_transfer::lab::lab_f;
///
/// assert!((lab_f(1.0) - 1.0).abs() < 1e-12);
/// ```
#[inline]
pub fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.powf(1.0 / 3.0)
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

/// Lab inverse function.
///
/// # Formula
///
/// ```text
/// if ft^3 > 216/24389:
///     t = ft^3
/// else:
///     t = (116 * ft - 16) / kappa
/// ```
///
/// # Example
///
/// ```rust
/// use tonal_transfer::lab::{lab_f, lab_invf};
///
/// let t = 0.42;
/// assert!((lab_invf(lab_f(t)) - t).abs() < 1e-12);
/// ```
#[inline]
pub fn lab_invf(ft: f64) -> f64 {
    let ft3 = ft * ft * ft;
    if ft3 > EPSILON {
        ft3
    } else {
        (116.0 * ft - 16.0) / KAPPA
    }
}
