//! # tonal-color
//!
//! Color science conversions between ARGB, sRGB, linear RGB, CIE XYZ, and
//! CIE L\*a\*b\*.
//!
//! This crate is the numeric foundation under perceptual color systems
//! (HCT, CAM16, tonal palette generation). Its contract is bit-exact
//! compatibility with Google's material-color-utilities: the same matrix
//! literals, the same piecewise thresholds, the same branch structure, all
//! in `f64`.
//!
//! # Representations
//!
//! | Name | Type | Range |
//! |------|------|-------|
//! | ARGB | `u32` | `(A<<24) \| (R<<16) \| (G<<8) \| B`, 8 bits per channel |
//! | Linear RGB | `f64` | [0, 100] per channel |
//! | XYZ | `[f64; 3]` | D65-scaled, Y=100 at reference white |
//! | L\*a\*b\* | `[f64; 3]` | L\* in [0, 100]; a, b unbounded in practice |
//!
//! # Quick Start
//!
//! ```rust
//! use tonal_color::{argb_from_rgb, lab_from_argb, argb_from_lstar, lstar_from_argb};
//!
//! let red = argb_from_rgb(255, 0, 0);
//! let [l, a, b] = lab_from_argb(red);
//! assert!((l - 53.2329).abs() < 1e-3);
//!
//! // Neutral gray with a given perceptual lightness
//! let gray = argb_from_lstar(50.0);
//! assert!((lstar_from_argb(gray) - 50.0).abs() < 0.25);
//! ```
//!
//! # Purity
//!
//! Every function here is pure and total: no state, no I/O, no allocation
//! beyond fixed-size arrays, no panics on finite inputs. Out-of-range
//! values are absorbed by the channel clamp at the final quantization step.
//! NaN and infinity are outside the contract; they produce unspecified (but
//! non-trapping) output.
//!
//! # Dependencies
//!
//! - [`tonal-math`] - `Vec3`/`Mat3` and clamps
//! - [`tonal-transfer`] - sRGB and Lab piecewise functions
//!
//! # Used By
//!
//! Higher-level appearance models and palette generators.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod argb;
pub mod convert;
pub mod matrices;

pub use argb::{
    alpha_from_argb, argb_from_rgb, blue_from_argb, green_from_argb, is_opaque, red_from_argb,
};
pub use convert::{
    argb_from_lab, argb_from_lstar, argb_from_xyz, lab_from_argb, lstar_from_argb, xyz_from_argb,
    y_from_lstar,
};
pub use matrices::{SRGB_TO_XYZ, WHITE_POINT_D65, XYZ_TO_SRGB};
