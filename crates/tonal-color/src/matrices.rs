//! Fixed sRGB/XYZ transforms and the D65 white point.
//!
//! These literals come from material-color-utilities and are kept verbatim,
//! including their uneven precision. The two matrices are **not** exact
//! inverses of one another; neither is ever derived from the other, because
//! recomputing either would change low-order bits throughout the library.

use tonal_math::{Mat3, Vec3};

/// The linear sRGB to CIE XYZ transform (D65, Y=100 at reference white).
pub const SRGB_TO_XYZ: Mat3 = Mat3::from_rows([
    [0.41233895, 0.35762064, 0.18051042],
    [0.2126, 0.7152, 0.0722],
    [0.01932141, 0.11916382, 0.95034478],
]);

/// The CIE XYZ to linear sRGB transform (D65, Y=100 at reference white).
pub const XYZ_TO_SRGB: Mat3 = Mat3::from_rows([
    [3.2406, -1.5372, -0.4986],
    [-0.9689, 1.8758, 0.0415],
    [0.0557, -0.204, 1.057],
]);

/// The D65 standard illuminant white point, scaled so Y = 100.
pub const WHITE_POINT_D65: Vec3 = Vec3::new(95.047, 100.0, 108.883);
