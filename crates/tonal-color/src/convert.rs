//! Conversions between ARGB, CIE XYZ, CIE L*a*b*, and L*.
//!
//! All conversions route through linear RGB scaled to [0, 100] and the
//! fixed matrices in [`crate::matrices`]. Arithmetic is `f64` throughout
//! and matches material-color-utilities branch for branch.
//!
//! # Example
//!
//! ```rust
//! use tonal_color::convert::{lab_from_argb, argb_from_lab};
//!
//! let [l, a, b] = lab_from_argb(0xFFFF0000);
//! assert_eq!(argb_from_lab(l, a, b), 0xFFFF0000);
//! ```

use tonal_math::Vec3;
use tonal_transfer::lab::{lab_f, lab_invf, EPSILON, KAPPA};
use tonal_transfer::srgb::{delinearized, linearized};

use crate::argb::{argb_from_rgb, blue_from_argb, green_from_argb, red_from_argb};
use crate::matrices::{SRGB_TO_XYZ, WHITE_POINT_D65, XYZ_TO_SRGB};

/// Converts an ARGB color to CIE XYZ.
///
/// Alpha is ignored. The result is D65-scaled with Y = 100 at reference
/// white.
///
/// # Example
///
/// ```rust
/// use tonal_color::convert::xyz_from_argb;
///
/// let [x, y, z] = xyz_from_argb(0xFFFF0000);
/// assert!((y - 21.26).abs() < 1e-9);
/// ```
#[inline]
pub fn xyz_from_argb(argb: u32) -> [f64; 3] {
    let r = linearized(red_from_argb(argb));
    let g = linearized(green_from_argb(argb));
    let b = linearized(blue_from_argb(argb));
    (SRGB_TO_XYZ * Vec3::new(r, g, b)).to_array()
}

/// Converts CIE XYZ to an opaque ARGB color.
///
/// Out-of-gamut XYZ values saturate at the channel clamp.
#[inline]
pub fn argb_from_xyz(x: f64, y: f64, z: f64) -> u32 {
    let linear_rgb = XYZ_TO_SRGB * Vec3::new(x, y, z);
    let r = delinearized(linear_rgb.x);
    let g = delinearized(linear_rgb.y);
    let b = delinearized(linear_rgb.z);
    argb_from_rgb(r, g, b)
}

/// Converts an ARGB color to CIE L*a*b*.
///
/// Returns `[l, a, b]` with L\* in [0, 100].
pub fn lab_from_argb(argb: u32) -> [f64; 3] {
    let white_point = WHITE_POINT_D65;
    let xyz = xyz_from_argb(argb);
    let fx = lab_f(xyz[0] / white_point.x);
    let fy = lab_f(xyz[1] / white_point.y);
    let fz = lab_f(xyz[2] / white_point.z);
    let l = 116.0 * fy - 16.0;
    let a = 500.0 * (fx - fy);
    let b = 200.0 * (fy - fz);
    [l, a, b]
}

/// Converts CIE L*a*b* to an opaque ARGB color.
pub fn argb_from_lab(l: f64, a: f64, b: f64) -> u32 {
    let white_point = WHITE_POINT_D65;
    let fy = (l + 16.0) / 116.0;
    let fx = a / 500.0 + fy;
    let fz = fy - b / 200.0;
    let x = lab_invf(fx) * white_point.x;
    let y = lab_invf(fy) * white_point.y;
    let z = lab_invf(fz) * white_point.z;
    argb_from_xyz(x, y, z)
}

/// Computes the L* (perceptual lightness) of an ARGB color.
///
/// # Example
///
/// ```rust
/// use tonal_color::convert::lstar_from_argb;
///
/// assert_eq!(lstar_from_argb(0xFF000000), 0.0);
/// assert!((lstar_from_argb(0xFFFFFFFF) - 100.0).abs() < 1e-6);
/// ```
pub fn lstar_from_argb(argb: u32) -> f64 {
    let y = xyz_from_argb(argb)[1] / 100.0;
    if y <= EPSILON {
        KAPPA * y
    } else {
        116.0 * y.powf(1.0 / 3.0) - 16.0
    }
}

/// Returns the neutral (grayscale) ARGB color with the given L*.
///
/// The Y branch gates on `lstar > 8` while the X and Z branches gate on
/// `fy^3 > epsilon`. The two conditions are algebraically the same
/// threshold, but they are kept as separate tests so output agrees with
/// material-color-utilities down to any rounding the split produces.
pub fn argb_from_lstar(lstar: f64) -> u32 {
    let fy = (lstar + 16.0) / 116.0;
    let fz = fy;
    let fx = fy;
    let l_exceeds_epsilon_kappa = lstar > 8.0;
    let y = if l_exceeds_epsilon_kappa {
        fy * fy * fy
    } else {
        lstar / KAPPA
    };
    let cube_exceeds_epsilon = fy * fy * fy > EPSILON;
    let x = if cube_exceeds_epsilon {
        fx * fx * fx
    } else {
        lstar / KAPPA
    };
    let z = if cube_exceeds_epsilon {
        fz * fz * fz
    } else {
        lstar / KAPPA
    };
    let white_point = WHITE_POINT_D65;
    argb_from_xyz(
        x * white_point.x,
        y * white_point.y,
        z * white_point.z,
    )
}

/// Converts an L* value to a Y value (both measure luminance).
///
/// L\* is perceptual lightness; Y is relative luminance in XYZ. The high
/// branch inverts the Lab lightness function. The low branch divides by
/// 24389 and then by 27. material-color-utilities encodes it this way
/// rather than dividing by kappa = 24389/27; the quirk is kept verbatim
/// for bit compatibility, so `y_from_lstar` does not invert
/// [`lstar_from_argb`] below L\* = 8.
///
/// # Example
///
/// ```rust
/// use tonal_color::convert::y_from_lstar;
///
/// assert!((y_from_lstar(50.0) - 18.4187).abs() < 1e-3);
/// ```
pub fn y_from_lstar(lstar: f64) -> f64 {
    let ke = 8.0;
    if lstar > ke {
        ((lstar + 16.0) / 116.0).powf(3.0) * 100.0
    } else {
        lstar / 24389.0 / 27.0 * 100.0
    }
}
